// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    // Canvas fill styles take CSS strings, e.g. "rgba(16, 185, 129, 0.8)"
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha())
    }
}
