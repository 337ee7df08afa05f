use std::{fs::File, io::Read};

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content = content.trim();

    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}

/// Encode a single tlv, header included.
#[allow(dead_code)]
pub fn tlv(type_code: u8, value: &[u8]) -> Vec<u8> {
    assert!(type_code <= 0x7f && value.len() <= 0x1ff);
    let header = (u16::from(type_code) << 9) | value.len() as u16;
    let mut buf = header.to_be_bytes().to_vec();
    buf.extend_from_slice(value);
    buf
}

/// Concatenate encoded tlvs into an lldpdu.
#[allow(dead_code)]
pub fn lldpdu(tlvs: &[Vec<u8>]) -> Vec<u8> {
    tlvs.concat()
}

/// Prefix `lldpdu` with an ethernet header.
#[allow(dead_code)]
pub fn ether_frame(dst: [u8; 6], ethertype: u16, lldpdu: &[u8]) -> Vec<u8> {
    let mut buf = dst.to_vec();
    buf.extend_from_slice(&[0x00, 0x16, 0xc8, 0x86, 0x51, 0x89]);
    buf.extend_from_slice(&ethertype.to_be_bytes());
    buf.extend_from_slice(lldpdu);
    buf
}
