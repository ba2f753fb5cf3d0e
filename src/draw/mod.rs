pub mod grid;
pub mod window;

pub use self::grid::GridData;
pub use self::window::WindowData;
