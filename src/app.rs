use std::path::PathBuf;

use eframe::egui;

use crate::config::Config;
use crate::layout;
use crate::state::{Highlight, Listing, Pager};
use crate::style::Theme;

pub struct Breve {
    pub current_path: PathBuf,
    pub listing: Listing,
    pub pager: Pager,
    pub highlight: Highlight,
    pub theme: Theme,
    pub font_size: f32,
    pub icon_size: f32,
    title_dirty: bool,
}

impl Breve {
    pub fn new(config: &Config, start_path: PathBuf) -> Self {
        let listing = Listing::load(&start_path);

        Self {
            current_path: start_path,
            listing,
            pager: Pager::new(layout::PAGE_SIZE),
            highlight: Highlight::None,
            theme: Theme::from_mode(&config.theme.mode),
            font_size: config.font.font_size,
            icon_size: config.font.icon_size,
            title_dirty: true,
        }
    }

    fn title(&self) -> String {
        format!("Breve - {}", self.current_path.display())
    }

    /// Replaces the current listing with `path`'s. The old generation and
    /// its cached galleys are dropped with it.
    pub(crate) fn navigate(&mut self, path: PathBuf) {
        log::info!("navigating to {}", path.display());
        self.listing = Listing::load(&path);
        self.current_path = path;
        self.pager.reset();
        self.highlight = Highlight::None;
        self.title_dirty = true;
    }

    /// Dispatches a primary press landing on whatever is highlighted.
    pub(crate) fn press(&mut self) {
        let bounds = self.pager.bounds(self.listing.len());
        match self.highlight {
            Highlight::Entry(row) => {
                if let Some(entry) = self.listing.entries.get(bounds.start + row) {
                    if entry.is_dir {
                        let path = entry.path.clone();
                        self.navigate(path);
                    }
                    // Plain files: opening is out of scope, nothing happens.
                }
            }
            Highlight::NextButton => {
                if self.pager.next(self.listing.len()) {
                    self.listing.invalidate_text();
                }
            }
            Highlight::PrevButton => {
                if self.pager.prev() {
                    self.listing.invalidate_text();
                }
            }
            Highlight::None => {}
        }
    }
}

impl eframe::App for Breve {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.title_dirty {
            self.title_dirty = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title()));
        }

        let bounds = self.pager.bounds(self.listing.len());
        let hit = ctx
            .input(|i| i.pointer.latest_pos())
            .map_or(Highlight::None, |pos| layout::hit_test(pos, bounds.len()));
        if hit != self.highlight {
            log::trace!("highlight {:?} -> {:?}", self.highlight, hit);
            self.highlight = hit;
        }

        if ctx.input(|i| i.pointer.primary_pressed()) {
            self.press();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.render_browser(ui);
            });
    }
}
