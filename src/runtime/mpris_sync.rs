use crate::mpris::MprisHandle;
use crate::player::PlaybackController;

pub fn update_mpris(mpris: &MprisHandle, player: &PlaybackController) {
    mpris.set_track_metadata(player.current().map(|t| t.as_ref()));
    mpris.set_playback(player.status());
}
