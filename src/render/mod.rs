pub mod filmstrip;
pub mod knob;

// Re-export commonly used items
pub use filmstrip::{assemble, encode_png, save_png};
pub use knob::{angle_for_frame, indicator_tip, render_frame, render_frame_at};
