use librc522::chip::register::{read_frame, write_frame};
use librc522::chip::{PcdCommand, Register};
use librc522::transport::Transport;
use librc522::transport::mock::{CardReply, MockTransport};

fn write(t: &mut MockTransport, reg: Register, value: u8) {
    t.exchange(&[write_frame(reg.addr()), value]).unwrap();
}

fn read(t: &mut MockTransport, reg: Register) -> u8 {
    t.exchange(&[read_frame(reg.addr()), 0x00]).unwrap()[1]
}

#[test]
fn clones_share_one_chip() {
    let mut a = MockTransport::new();
    let b = a.clone();
    write(&mut a, Register::TMode, 0x8D);
    assert_eq!(b.register(Register::TMode), 0x8D);
}

#[test]
fn flush_discards_staged_bytes() {
    let mut t = MockTransport::new();
    t.push_reply(CardReply::bytes(&[0x01]));
    write(&mut t, Register::FifoData, 0xEE);
    write(&mut t, Register::FifoLevel, 0x80);
    write(&mut t, Register::FifoData, 0x26);
    write(&mut t, Register::Command, PcdCommand::Transceive.code());
    write(&mut t, Register::BitFraming, 0x80);
    assert_eq!(t.transceived(), vec![vec![0x26]]);
    assert_eq!(t.fifo_writes(), vec![0xEE, 0x26]);
}

#[test]
fn auth_reply_sets_crypto_bit() {
    let mut t = MockTransport::new();
    t.push_reply(CardReply::Auth { crypto: true });
    write(&mut t, Register::Command, PcdCommand::MfAuthent.code());
    assert_eq!(read(&mut t, Register::Status2) & 0x08, 0x08);
    assert_eq!(read(&mut t, Register::ComIrq) & 0x10, 0x10);
}

#[test]
fn irq_polls_count_since_last_command() {
    let mut t = MockTransport::new();
    read(&mut t, Register::ComIrq);
    write(&mut t, Register::Command, PcdCommand::Idle.code());
    read(&mut t, Register::ComIrq);
    read(&mut t, Register::ComIrq);
    assert_eq!(t.irq_polls(), 2);
}
