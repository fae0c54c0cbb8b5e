#[macro_use]
extern crate afl;
extern crate crc64stream;

use crc64stream::{Digest, Table, POLY};

const CRC_NVME: crc::Algorithm<u64> = crc::Algorithm {
    width: 64,
    poly: 0xAD93D23594C93659,
    init: 0xFFFFFFFFFFFFFFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFFFFFFFFFFFFFF,
    check: 0xae8b14860a799888,
    residue: 0x0000000000000000,
};

fn main() {
    let table = Table::new(POLY);
    let crc = crc::Crc::<u64>::new(&CRC_NVME);
    let digest_init = Digest::new(&table);
    fuzz!(|data: &[u8]| {
        let mut digest = digest_init.clone();
        digest.write(data);
        assert_eq!(digest.sum64(), crc.checksum(data));
    });
}
