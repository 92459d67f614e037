// Bonk Vote Program Constants

use anchor_lang::prelude::*;

pub const GLOBAL_STATE_SEED: &[u8] = b"global";
pub const PAIR_SEED: &[u8] = b"pair";

#[constant]
pub const MAX_NAME_LEN: usize = 32; // also the per-seed length limit
#[constant]
pub const MAX_LINK_LEN: usize = 200;

pub const PERCENTAGE_TOTAL: u16 = 100;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
