use raylib::prelude::*;

use crate::layout::fit_rect;

pub struct Slide {
    image: Texture2D,
    pub visible: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        // Hidden until the controller says otherwise
        Self { image, visible: false }
    }

    /// Draws the slide centered in `area`, shrunk to fit when too large.
    pub fn draw(&self, d: &mut RaylibDrawHandle, area: &Rectangle) {
        if !self.visible {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            fit_rect(tex_width, tex_height, area),
            Vector2::new(0.0, 0.0),
            0.0, // EXIF rotation is baked into the texture
            Color::WHITE,
        );
    }
}
