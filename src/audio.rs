use std::f32::consts::TAU;

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

use crate::game::Cue;

const SAMPLE_RATE: u32 = 44_100;
const BYTES_PER_SAMPLE: u16 = 2;
const HEADER_LEN: usize = 44;
/// Headroom so the beeps never clip
const PEAK: f32 = 0.7 * i16::MAX as f32;

/// A short sine beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub seconds: f32,
    /// Playback volume relative to the master volume
    pub gain: f32,
}

impl Tone {
    pub const fn new(frequency_hz: f32, seconds: f32, gain: f32) -> Self {
        Self {
            frequency_hz,
            seconds,
            gain,
        }
    }

    pub fn for_cue(cue: Cue) -> Self {
        match cue {
            Cue::Death => Self::new(110.0, 0.25, 0.6),
            Cue::Eat => Self::new(880.0, 0.08, 0.35),
            Cue::Milestone => Self::new(1320.0, 0.2, 0.45),
        }
    }

    fn sample_count(&self) -> u32 {
        (self.seconds * SAMPLE_RATE as f32) as u32
    }

    fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        let step = TAU * self.frequency_hz / SAMPLE_RATE as f32;
        (0..self.sample_count()).map(move |n| ((n as f32 * step).sin() * PEAK) as i16)
    }

    /// Mono PCM16 WAV bytes, ready for `load_sound_from_bytes`
    pub fn to_wav(&self) -> Vec<u8> {
        let data_len = self.sample_count() * BYTES_PER_SAMPLE as u32;
        let mut wav = Vec::with_capacity(HEADER_LEN + data_len as usize);
        write_header(&mut wav, data_len);
        wav.extend(self.samples().flat_map(i16::to_le_bytes));
        wav
    }
}

fn write_header(out: &mut Vec<u8>, data_len: u32) {
    let byte_rate = SAMPLE_RATE * BYTES_PER_SAMPLE as u32;

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(HEADER_LEN as u32 - 8 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&[1, 0, 1, 0]); // PCM, one channel
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&BYTES_PER_SAMPLE.to_le_bytes());
    out.extend_from_slice(&(BYTES_PER_SAMPLE * 8).to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
}

/// Fire-and-forget effects for the three cues
pub struct Sounds {
    death: Option<Sound>,
    eat: Option<Sound>,
    milestone: Option<Sound>,
    volume: f32,
}

impl Sounds {
    /// Cues that fail to load stay silent.
    pub async fn load(volume: f32) -> Self {
        Self {
            death: load_cue(Cue::Death).await,
            eat: load_cue(Cue::Eat).await,
            milestone: load_cue(Cue::Milestone).await,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn play(&self, cue: Cue) {
        let sound = match cue {
            Cue::Death => &self.death,
            Cue::Eat => &self.eat,
            Cue::Milestone => &self.milestone,
        };
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: Tone::for_cue(cue).gain * self.volume,
                },
            );
        }
    }
}

async fn load_cue(cue: Cue) -> Option<Sound> {
    match load_sound_from_bytes(&Tone::for_cue(cue).to_wav()).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("could not load {cue:?} sound: {err:?}");
            None
        }
    }
}
