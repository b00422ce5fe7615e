use gpui::{Hsla, rgb};

pub const COLOR_STOPS: usize = 10;
pub type ColorScale = [u32; COLOR_STOPS];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PaletteKey {
    Gray,
    Red,
    Blue,
    Green,
}

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn scale(key: PaletteKey) -> ColorScale {
        match key {
            PaletteKey::Gray => [
                0xf8f9fa, 0xf1f3f5, 0xe9ecef, 0xdee2e6, 0xced4da, 0xadb5bd, 0x868e96, 0x495057,
                0x343a40, 0x212529,
            ],
            PaletteKey::Red => [
                0xfff5f5, 0xffe3e3, 0xffc9c9, 0xffa8a8, 0xff8787, 0xff6b6b, 0xfa5252, 0xf03e3e,
                0xe03131, 0xc92a2a,
            ],
            PaletteKey::Blue => [
                0xe7f5ff, 0xd0ebff, 0xa5d8ff, 0x74c0fc, 0x4dabf7, 0x339af0, 0x228be6, 0x1c7ed6,
                0x1971c2, 0x1864ab,
            ],
            PaletteKey::Green => [
                0xebfbee, 0xd3f9d8, 0xb2f2bb, 0x8ce99a, 0x69db7c, 0x51cf66, 0x40c057, 0x37b24d,
                0x2f9e44, 0x2b8a3e,
            ],
        }
    }

    pub fn color(key: PaletteKey, stop: usize) -> Hsla {
        let scale = Self::scale(key);
        rgb(scale[stop.min(COLOR_STOPS - 1)]).into()
    }
}

/// Semantic colors used by the form components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Hsla,
    pub surface: Hsla,
    pub text: Hsla,
    pub muted: Hsla,
    pub border: Hsla,
    pub border_focus: Hsla,
    pub error: Hsla,
    pub error_surface: Hsla,
    pub primary: Hsla,
    pub primary_hover: Hsla,
    pub primary_text: Hsla,
    pub success: Hsla,
    pub success_surface: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        use PaletteKey::{Blue, Gray, Green, Red};
        Self {
            background: PaletteCatalog::color(Gray, 1),
            surface: gpui::white(),
            text: PaletteCatalog::color(Gray, 9),
            muted: PaletteCatalog::color(Gray, 6),
            border: PaletteCatalog::color(Gray, 4),
            border_focus: PaletteCatalog::color(Blue, 6),
            error: PaletteCatalog::color(Red, 8),
            error_surface: PaletteCatalog::color(Red, 0),
            primary: PaletteCatalog::color(Blue, 6),
            primary_hover: PaletteCatalog::color(Blue, 7),
            primary_text: gpui::white(),
            success: PaletteCatalog::color(Green, 8),
            success_surface: PaletteCatalog::color(Green, 0),
        }
    }
}

impl gpui::Global for Theme {}

impl Theme {
    pub fn install(self, cx: &mut gpui::App) {
        cx.set_global(self);
    }

    /// The installed theme, or the default one when none was installed.
    pub fn of(cx: &gpui::App) -> Self {
        cx.try_global::<Self>().copied().unwrap_or_default()
    }
}
