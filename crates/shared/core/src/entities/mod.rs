mod actor;
mod event;
mod order;
mod side;

pub use actor::Actor;
pub use event::{Event, EventAction, EventLog, EventNote};
pub use order::Order;
pub use side::Side;
