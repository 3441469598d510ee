use bevy::prelude::*;
use bevy::window::{PresentMode, WindowPosition, WindowResolution};
use constants::render_settings::{WINDOW_POSITION, WINDOW_SIZE, WINDOW_TITLE};

pub fn create_window_config() -> Window {
    Window {
        title: WINDOW_TITLE.to_string(),
        resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE),
        position: WindowPosition::At(WINDOW_POSITION),
        resizable: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_square_and_fixed() {
        let window = create_window_config();
        assert_eq!(window.title, "Mars Rovers");
        assert_eq!(window.width(), 960.0);
        assert_eq!(window.height(), 960.0);
        assert!(!window.resizable);
        assert_eq!(window.position, WindowPosition::At(IVec2::new(10, 50)));
    }
}
