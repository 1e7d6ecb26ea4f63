//! Per-platform profiles. Adding a platform means adding a table here, not
//! new control flow in the engine.

mod facebook;
mod google;
mod instagram;
mod linkedin;
mod meta;
pub(crate) mod shared;
mod whatsapp;

use campaign_core::Platform;

use crate::profile::PlatformProfile;

pub fn profile_for(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::Whatsapp => &whatsapp::PROFILE,
        Platform::Facebook => &facebook::PROFILE,
        Platform::Google => &google::PROFILE,
        Platform::Linkedin => &linkedin::PROFILE,
        Platform::Instagram => &instagram::PROFILE,
    }
}
