#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod errors;
#[cfg(feature = "std")]
pub mod fps;
pub mod lights;
pub mod logging;
#[cfg(feature = "std")]
pub mod run_loop;
pub mod session;
#[cfg(feature = "std")]
pub mod stop;
