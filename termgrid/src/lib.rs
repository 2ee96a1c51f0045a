pub mod buffer;
pub mod element;
pub mod event;
pub mod handlers;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Element};
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use handlers::{dispatch, Handler, HandlerRegistry, ON_CLICK};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, measure, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
