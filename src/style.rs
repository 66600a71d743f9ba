use eframe::egui::Color32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color32::from_rgb(24, 26, 32),
                row_stripe: Color32::from_rgb(30, 33, 40),
                chrome: Color32::from_rgb(38, 42, 52),
                text: Color32::from_rgb(220, 223, 228),
                dim_text: Color32::from_rgb(140, 145, 155),
                accent: Color32::from_rgb(120, 180, 255),
                button: Color32::from_rgb(52, 58, 72),
                button_disabled: Color32::from_rgb(40, 44, 54),
                error: Color32::from_rgb(240, 110, 110),
            },
            Self::Light => Palette {
                background: Color32::from_rgb(246, 246, 248),
                row_stripe: Color32::from_rgb(236, 237, 241),
                chrome: Color32::from_rgb(222, 224, 230),
                text: Color32::from_rgb(35, 38, 46),
                dim_text: Color32::from_rgb(110, 115, 125),
                accent: Color32::from_rgb(40, 110, 220),
                button: Color32::from_rgb(205, 208, 216),
                button_disabled: Color32::from_rgb(222, 224, 230),
                error: Color32::from_rgb(190, 40, 40),
            },
        }
    }
}

/// Resolved colors for one theme.
#[derive(Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub row_stripe: Color32,
    pub chrome: Color32,
    pub text: Color32,
    pub dim_text: Color32,
    pub accent: Color32,
    pub button: Color32,
    pub button_disabled: Color32,
    pub error: Color32,
}
