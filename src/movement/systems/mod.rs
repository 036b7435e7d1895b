//! Movement domain: system modules for the player controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;


pub(crate) use collisions::detect_trap_contacts;
#[cfg(feature = "dev-tools")]
pub(crate) use collisions::{ShapeCastGroundProbe, collider_half_extents};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_player_movement, select_player_animation};
