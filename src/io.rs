use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use gridlife::events::AppEvent;
use gridlife::events::Event;
use gridlife::events::RecolorTarget;
use gridlife::events::SimEvent;

/// Converts an SDL event into a gridlife event.
///
/// `-` and `+` change the speed, `p` pauses, a left click recolors the cells,
/// any other click recolors the background, `Escape`/`q` (or closing the
/// window) quits, and `F11` toggles fullscreen.
pub fn convert_event(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::App(AppEvent::Exit)),

        SdlEvent::KeyDown {
            keycode: Some(keycode),
            ..
        } => match keycode {
            Keycode::Escape | Keycode::Q => Some(Event::App(AppEvent::Exit)),

            Keycode::P => Some(Event::Sim(SimEvent::TogglePause)),
            Keycode::Minus => Some(Event::Sim(SimEvent::SlowDown)),
            Keycode::Plus => Some(Event::Sim(SimEvent::SpeedUp)),

            Keycode::F11 => Some(Event::App(AppEvent::ToggleFullscreen)),

            _ => None,
        },

        SdlEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            ..
        } => Some(Event::App(AppEvent::Recolor(RecolorTarget::Cells))),

        SdlEvent::MouseButtonDown { .. } => {
            Some(Event::App(AppEvent::Recolor(RecolorTarget::Background)))
        }

        _ => None,
    }
}
