//! Serial byte bridge: interrupt-side event intake, polled echo task, and
//! line formatting for status text.

pub mod bridge;
pub mod console;
pub mod echo;

pub use bridge::SerialBridge;
pub use console::{LineBuffer, Overflow};
pub use echo::EchoTask;
