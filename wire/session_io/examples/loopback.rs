use std::collections::VecDeque;
use std::time::Duration;

use packet_codec::{Bit, BitField, Packet};
use session_io::{Egress, Inbound, Ingress, Outbound, SessionError, Transfer};

/// An in-memory session: posted bytes become readable bytes.
#[derive(Default)]
struct Loopback {
    queue: VecDeque<u8>,
}

impl Outbound for Loopback {
    fn output_bytes_available(&self) -> usize {
        usize::MAX
    }

    fn post(&mut self, tx: &[u8], _timeout: Duration) -> Result<Transfer, SessionError> {
        self.queue.extend(tx);
        Ok(Transfer::Complete)
    }
}

impl Inbound for Loopback {
    fn input_bytes_available(&self) -> usize {
        self.queue.len()
    }

    fn request(&mut self, rx: &mut [u8], _timeout: Duration) -> Result<Transfer, SessionError> {
        for byte in rx.iter_mut() {
            *byte = self.queue.pop_front().ok_or(SessionError::Denied)?;
        }
        Ok(Transfer::Complete)
    }
}

// A 10-bit sequence number, two status bits, then an aligned payload word.
type Heartbeat = Packet<(BitField<10>, Bit, Bit, u32)>;

fn main() {
    let mut link = Loopback::default();

    let frame = Heartbeat::new((
        BitField::new(0x155),
        Bit::new(true),
        Bit::new(false),
        0xDEAD_BEEF,
    ));

    Egress::new(&mut link)
        .put(&frame, Duration::ZERO)
        .expect("loopback always has room");
    println!("posted {} byte(s)", link.queue.len());

    let mut received = Heartbeat::default();
    Ingress::new(&mut link)
        .get(&mut received, Duration::ZERO)
        .expect("loopback holds a full frame");

    assert_eq!(received, frame);
    println!(
        "received sequence {:#X}, alive={}",
        received.fields.0.value, received.fields.1.value
    );
}
