//! Poll for a card, select it, authenticate sector 1 and dump block 4.
//!
//! Runs against the simulated chip so it works without hardware; swap the
//! transport for `SpiTransport` (feature `hal`) on a real board.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p librc522 --example read_card

use librc522::prelude::*;
use librc522::test_support::{block_reply, seed_card_present};
use librc522::transport::mock::{CardReply, MockTransport};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let known = Uid::from_serial([0xDE, 0xAD, 0xBE, 0xEF]);

    // script the card that sits on the simulated antenna
    let mock = MockTransport::new();
    mock.push_reply(CardReply::NoTag);
    mock.push_reply(CardReply::NoTag);
    seed_card_present(&mock, &known);
    mock.push_reply(CardReply::NoTag); // halt
    mock.push_reply(CardReply::bytes(&[0x04, 0x00])); // WUPA
    mock.push_reply(CardReply::bytes(&[0x08, 0xB6, 0xDD]));
    mock.push_reply(CardReply::Auth { crypto: true });
    mock.push_reply(block_reply(b"librc522 example"));

    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .build()?;
    println!("chip version: {:#04x}", device.version()?);

    let uid = loop {
        let r = device.check_for_card();
        match r {
            Ok(uid) => break uid,
            Err(Error::NoAnswer) | Err(Error::NoTag) => println!("no card, polling again"),
            Err(e) => println!("poll {}: {}", e.outcome(), e),
        }
    };
    println!("card {} (known: {})", uid, compare_ids(&uid, &known));

    // the card was halted after the poll; wake it back up
    device.request(RequestMode::All)?;
    let card = device.select_card(&uid)?;
    println!("selected: {}", card.card_type());

    card.authenticate(&mut device, AuthMode::KeyA, 4, &MifareKey::DEFAULT)?;
    let block = card.read_block(&mut device, 4)?;
    println!("block 4: {}  |{}|", block.to_hex(), block.to_ascii_safe());

    stop_crypto(&mut device)?;
    Ok(())
}
