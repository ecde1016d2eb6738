#![allow(dead_code)]

pub mod card_helpers;
pub mod game_setup;
