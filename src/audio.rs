//! Audio cue queue
//!
//! The game never talks to a sound device. It queues cues here and the host
//! drains them each frame, playing them through whatever backend it has.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Background loop starts (new or resumed session)
    MusicStart,
    /// Background loop stops
    MusicStop,
    /// Player hit an obstacle
    Hit,
}

impl SoundEffect {
    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::MusicStart | SoundEffect::MusicStop)
    }
}

/// A queued cue with the volume it should play at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_playing: bool,
    pending: Vec<Cue>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            music_playing: false,
            pending: Vec::new(),
        }
    }

    /// Build from the audio part of the settings
    pub fn from_settings(settings: &crate::Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume for an effect
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Queue a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        match effect {
            SoundEffect::MusicStart if self.music_playing => return,
            SoundEffect::MusicStop if !self.music_playing => return,
            SoundEffect::MusicStart => self.music_playing = true,
            SoundEffect::MusicStop => self.music_playing = false,
            SoundEffect::Hit => {}
        }

        // Music state is tracked while muted so unmuting mid-run stays in sync
        let volume = self.effective_volume(effect);
        if volume <= 0.0 && !effect.is_music() {
            return;
        }
        self.pending.push(Cue { effect, volume });
    }

    /// Take every cue queued since the last drain
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.pending)
    }
}
