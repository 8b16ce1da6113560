//! Terminal echo task: the polled consumer/producer attached to one
//! [`SerialBridge`].
//!
//! On startup it sends the greeting banner, then loops forever echoing
//! received bytes. A carriage return (0x0D) is echoed as the two-byte
//! CR LF sequence; every other byte is echoed verbatim. Each outgoing byte
//! is armed through the serial write seam and acknowledged through the TX
//! semaphore before the next one, so at most one byte is ever in flight.

use embedded_hal::serial::Write;

use crate::config::GREETING;
use crate::rtos::{PollResult, Task};
use crate::serial::bridge::SerialBridge;

const CR: u8 = 0x0D;
const LF: u8 = 0x0A;

// Segments between wait points. `pos` and the echo buffer are the only
// locals that survive a suspension.
enum State {
    /// Arm the next banner byte.
    Banner { pos: usize },
    /// Wait for the armed banner byte to complete.
    BannerAck { pos: usize },
    /// Wait for a received byte.
    Idle,
    /// Arm the next echo byte.
    Send { buf: [u8; 2], len: u8, pos: u8 },
    /// Wait for the armed echo byte to complete.
    SendAck { buf: [u8; 2], len: u8, pos: u8 },
    /// Terminal; entered on a serial write error.
    Done,
}

/// Echoes console input through `W`, one byte in flight at a time.
pub struct EchoTask<'a, W> {
    bridge: &'a SerialBridge,
    uart: W,
    banner: &'static [u8],
    state: State,
}

impl<'a, W: Write<u8>> EchoTask<'a, W> {
    /// Echo task with the default greeting banner.
    pub fn new(bridge: &'a SerialBridge, uart: W) -> Self {
        Self::with_banner(bridge, uart, GREETING)
    }

    /// Echo task with a custom (possibly empty) banner.
    pub fn with_banner(bridge: &'a SerialBridge, uart: W, banner: &'static [u8]) -> Self {
        Self {
            bridge,
            uart,
            banner,
            state: State::Banner { pos: 0 },
        }
    }

    // Arm one byte. Ok(true) = armed, Ok(false) = transmit register busy
    // (retry next poll), Err = hard failure.
    fn arm(&mut self, byte: u8) -> Result<bool, ()> {
        match self.uart.write(byte) {
            Ok(()) => Ok(true),
            Err(nb::Error::WouldBlock) => Ok(false),
            Err(nb::Error::Other(_)) => Err(()),
        }
    }
}

impl<W: Write<u8>> Task for EchoTask<'_, W> {
    fn poll(&mut self) -> PollResult {
        loop {
            match self.state {
                State::Banner { pos } => {
                    if pos >= self.banner.len() {
                        self.state = State::Idle;
                        continue;
                    }
                    match self.arm(self.banner[pos]) {
                        Ok(true) => self.state = State::BannerAck { pos },
                        Ok(false) => return PollResult::Pending,
                        Err(()) => {
                            self.state = State::Done;
                            return PollResult::Finished;
                        }
                    }
                }
                State::BannerAck { pos } => {
                    if !self.bridge.try_ack_tx() {
                        return PollResult::Pending;
                    }
                    self.state = State::Banner { pos: pos + 1 };
                }
                State::Idle => {
                    let byte = match self.bridge.take_received() {
                        Some(byte) => byte,
                        None => return PollResult::Pending,
                    };
                    let (buf, len) = if byte == CR {
                        ([CR, LF], 2)
                    } else {
                        ([byte, 0], 1)
                    };
                    self.state = State::Send { buf, len, pos: 0 };
                }
                State::Send { buf, len, pos } => {
                    if pos >= len {
                        self.state = State::Idle;
                        continue;
                    }
                    match self.arm(buf[pos as usize]) {
                        Ok(true) => self.state = State::SendAck { buf, len, pos },
                        Ok(false) => return PollResult::Pending,
                        Err(()) => {
                            self.state = State::Done;
                            return PollResult::Finished;
                        }
                    }
                }
                State::SendAck { buf, len, pos } => {
                    if !self.bridge.try_ack_tx() {
                        return PollResult::Pending;
                    }
                    self.state = State::Send { buf, len, pos: pos + 1 };
                }
                State::Done => return PollResult::Finished,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction};

    #[test]
    fn banner_goes_out_byte_by_byte() {
        let mut uart = SerialMock::new(&[Transaction::write(b'H'), Transaction::write(b'i')]);
        let bridge = SerialBridge::new();
        let mut task = EchoTask::with_banner(&bridge, uart.clone(), b"Hi");

        // First poll arms 'H' and blocks on the completion event.
        assert_eq!(task.poll(), PollResult::Pending);
        assert_eq!(task.poll(), PollResult::Pending);

        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // arms 'i'
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // banner done, idle

        uart.done();
    }

    #[test]
    fn default_banner_is_the_greeting() {
        let expected: Vec<Transaction<u8>> = crate::config::GREETING
            .iter()
            .map(|&b| Transaction::write(b))
            .collect();
        let mut uart = SerialMock::new(&expected);
        let bridge = SerialBridge::new();
        let mut task = EchoTask::new(&bridge, uart.clone());

        for _ in crate::config::GREETING {
            assert_eq!(task.poll(), PollResult::Pending); // arms one byte
            bridge.on_tx_complete();
        }
        assert_eq!(task.poll(), PollResult::Pending); // idle after the banner

        uart.done();
    }

    #[test]
    fn echoes_plain_byte_verbatim() {
        let mut uart = SerialMock::new(&[Transaction::write(b'x')]);
        let bridge = SerialBridge::new();
        let mut task = EchoTask::with_banner(&bridge, uart.clone(), b"");

        assert_eq!(task.poll(), PollResult::Pending); // idle, nothing received

        bridge.on_byte_received(b'x');
        assert_eq!(task.poll(), PollResult::Pending); // armed 'x'
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // acked, idle again

        uart.done();
    }

    #[test]
    fn carriage_return_becomes_crlf() {
        let mut uart = SerialMock::new(&[Transaction::write(0x0D), Transaction::write(0x0A)]);
        let bridge = SerialBridge::new();
        let mut task = EchoTask::with_banner(&bridge, uart.clone(), b"");

        bridge.on_byte_received(0x0D);
        assert_eq!(task.poll(), PollResult::Pending); // armed CR
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // armed LF
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // idle

        uart.done();
    }

    #[test]
    fn writer_stays_blocked_until_signal() {
        let mut uart = SerialMock::new(&[Transaction::write(b'a'), Transaction::write(b'b')]);
        let bridge = SerialBridge::new();
        let mut task = EchoTask::with_banner(&bridge, uart.clone(), b"");

        bridge.on_byte_received(b'a');
        assert_eq!(task.poll(), PollResult::Pending); // 'a' armed, in flight

        // No completion event yet: the writer cannot arm the next byte.
        bridge.on_byte_received(b'b');
        for _ in 0..5 {
            assert_eq!(task.poll(), PollResult::Pending);
        }

        // One signal unblocks exactly one arm on the very next poll.
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending); // 'b' armed
        bridge.on_tx_complete();
        assert_eq!(task.poll(), PollResult::Pending);

        uart.done();
    }

    struct BrokenUart;

    impl Write<u8> for BrokenUart {
        type Error = ();

        fn write(&mut self, _byte: u8) -> nb::Result<(), ()> {
            Err(nb::Error::Other(()))
        }

        fn flush(&mut self) -> nb::Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn write_error_finishes_the_task() {
        let bridge = SerialBridge::new();
        let mut task = EchoTask::with_banner(&bridge, BrokenUart, b"");

        bridge.on_byte_received(b'x');
        assert_eq!(task.poll(), PollResult::Finished);
        // Terminal state: later polls are no-ops.
        assert_eq!(task.poll(), PollResult::Finished);
    }
}
