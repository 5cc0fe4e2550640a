//! Sounds played to an audience.

use std::hash::{Hash, Hasher};

use phf::phf_map;
use text::Named;

/// The mixer channel a sound plays on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundSource {
    Master,
    Music,
    Record,
    Weather,
    Block,
    Hostile,
    Neutral,
    Player,
    Ambient,
    Voice,
}

static SOUND_SOURCES: phf::Map<&'static str, SoundSource> = phf_map! {
    "master" => SoundSource::Master,
    "music" => SoundSource::Music,
    "record" => SoundSource::Record,
    "weather" => SoundSource::Weather,
    "block" => SoundSource::Block,
    "hostile" => SoundSource::Hostile,
    "neutral" => SoundSource::Neutral,
    "player" => SoundSource::Player,
    "ambient" => SoundSource::Ambient,
    "voice" => SoundSource::Voice,
};

impl SoundSource {
    pub const ALL: [SoundSource; 10] = [
        SoundSource::Master,
        SoundSource::Music,
        SoundSource::Record,
        SoundSource::Weather,
        SoundSource::Block,
        SoundSource::Hostile,
        SoundSource::Neutral,
        SoundSource::Player,
        SoundSource::Ambient,
        SoundSource::Voice,
    ];
}

impl Named for SoundSource {
    const TABLE: &'static str = "sound source";

    fn values() -> &'static [Self] {
        &Self::ALL
    }

    fn table() -> &'static phf::Map<&'static str, Self> {
        &SOUND_SOURCES
    }

    fn name(self) -> &'static str {
        match self {
            SoundSource::Master => "master",
            SoundSource::Music => "music",
            SoundSource::Record => "record",
            SoundSource::Weather => "weather",
            SoundSource::Block => "block",
            SoundSource::Hostile => "hostile",
            SoundSource::Neutral => "neutral",
            SoundSource::Player => "player",
            SoundSource::Ambient => "ambient",
            SoundSource::Voice => "voice",
        }
    }
}

/// A sound with its channel, volume and pitch.
///
/// Volume and pitch compare by bit pattern, so a `NaN` volume equals
/// itself and `0.0` differs from `-0.0`. This keeps `Eq` and `Hash`
/// consistent.
#[derive(Clone, Debug)]
pub struct Sound {
    /// Sound identifier, e.g. `minecraft:entity.experience_orb.pickup`.
    pub name: String,
    pub source: SoundSource,
    pub volume: f32,
    pub pitch: f32,
}

impl Sound {
    pub fn new(name: impl Into<String>, source: SoundSource, volume: f32, pitch: f32) -> Self {
        Self {
            name: name.into(),
            source,
            volume,
            pitch,
        }
    }
}

impl PartialEq for Sound {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.source == other.source
            && self.volume.to_bits() == other.volume.to_bits()
            && self.pitch.to_bits() == other.pitch.to_bits()
    }
}

impl Eq for Sound {}

impl Hash for Sound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.source.hash(state);
        self.volume.to_bits().hash(state);
        self.pitch.to_bits().hash(state);
    }
}

/// Which playing sounds to stop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SoundStop {
    /// Only sounds with this identifier, or any sound when unset.
    pub sound: Option<String>,
    /// Only sounds on this channel, or any channel when unset.
    pub source: Option<SoundSource>,
}

impl SoundStop {
    /// Stop every sound.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn named(sound: impl Into<String>) -> Self {
        Self {
            sound: Some(sound.into()),
            source: None,
        }
    }

    pub fn source(source: SoundSource) -> Self {
        Self {
            sound: None,
            source: Some(source),
        }
    }

    pub fn named_on_source(sound: impl Into<String>, source: SoundSource) -> Self {
        Self {
            sound: Some(sound.into()),
            source: Some(source),
        }
    }

    /// Returns true if `sound` is one this stop applies to.
    pub fn matches(&self, sound: &Sound) -> bool {
        self.sound.as_deref().is_none_or(|name| name == sound.name)
            && self.source.is_none_or(|source| source == sound.source)
    }
}
