mod panels;
