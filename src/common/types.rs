// src/common/types.rs

use core::fmt;

/// Number of channels in a float-mode measurement.
pub const CHANNEL_COUNT: usize = 10;

/// One measurement channel of the SPS30, in wire order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Pm1Mass,
    Pm2_5Mass,
    Pm4Mass,
    Pm10Mass,
    Pm0_5Count,
    Pm1Count,
    Pm2_5Count,
    Pm4Count,
    Pm10Count,
    TypicalParticleSize,
}

impl Channel {
    /// All channels, in the order they appear in the read-measurement response.
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Pm1Mass,
        Channel::Pm2_5Mass,
        Channel::Pm4Mass,
        Channel::Pm10Mass,
        Channel::Pm0_5Count,
        Channel::Pm1Count,
        Channel::Pm2_5Count,
        Channel::Pm4Count,
        Channel::Pm10Count,
        Channel::TypicalParticleSize,
    ];

    /// Stable label used when exporting the channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Pm1Mass => "pm1_mass",
            Channel::Pm2_5Mass => "pm2_5_mass",
            Channel::Pm4Mass => "pm4_mass",
            Channel::Pm10Mass => "pm10_mass",
            Channel::Pm0_5Count => "pm0_5_num",
            Channel::Pm1Count => "pm1_num",
            Channel::Pm2_5Count => "pm2_5_num",
            Channel::Pm4Count => "pm4_num",
            Channel::Pm10Count => "pm10_num",
            Channel::TypicalParticleSize => "particle_size",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Pm1Mass | Channel::Pm2_5Mass | Channel::Pm4Mass | Channel::Pm10Mass => "µg/m³",
            Channel::Pm0_5Count
            | Channel::Pm1Count
            | Channel::Pm2_5Count
            | Channel::Pm4Count
            | Channel::Pm10Count => "particles/cm³",
            Channel::TypicalParticleSize => "µm",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SPS30 measured values in float output mode.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Measurement {
    /// Mass Concentration PM1.0 [µg/m³]
    pub pm1_mass: f32,
    /// Mass Concentration PM2.5 [µg/m³]
    pub pm2_5_mass: f32,
    /// Mass Concentration PM4.0 [µg/m³]
    pub pm4_mass: f32,
    /// Mass Concentration PM10 [µg/m³]
    pub pm10_mass: f32,
    /// Number Concentration PM0.5 [#/cm³]
    pub pm0_5_count: f32,
    /// Number Concentration PM1.0 [#/cm³]
    pub pm1_count: f32,
    /// Number Concentration PM2.5 [#/cm³]
    pub pm2_5_count: f32,
    /// Number Concentration PM4.0 [#/cm³]
    pub pm4_count: f32,
    /// Number Concentration PM10 [#/cm³]
    pub pm10_count: f32,
    /// Typical Particle Size [µm]
    pub typical_particle_size: f32,
}

impl Measurement {
    /// Builds a measurement from channel values in wire order.
    pub fn from_channels(values: [f32; CHANNEL_COUNT]) -> Self {
        let [
            pm1_mass,
            pm2_5_mass,
            pm4_mass,
            pm10_mass,
            pm0_5_count,
            pm1_count,
            pm2_5_count,
            pm4_count,
            pm10_count,
            typical_particle_size,
        ] = values;
        Self {
            pm1_mass,
            pm2_5_mass,
            pm4_mass,
            pm10_mass,
            pm0_5_count,
            pm1_count,
            pm2_5_count,
            pm4_count,
            pm10_count,
            typical_particle_size,
        }
    }

    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Pm1Mass => self.pm1_mass,
            Channel::Pm2_5Mass => self.pm2_5_mass,
            Channel::Pm4Mass => self.pm4_mass,
            Channel::Pm10Mass => self.pm10_mass,
            Channel::Pm0_5Count => self.pm0_5_count,
            Channel::Pm1Count => self.pm1_count,
            Channel::Pm2_5Count => self.pm2_5_count,
            Channel::Pm4Count => self.pm4_count,
            Channel::Pm10Count => self.pm10_count,
            Channel::TypicalParticleSize => self.typical_particle_size,
        }
    }

    /// Iterates over `(channel, value)` in wire order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        Channel::ALL.into_iter().map(move |channel| (channel, self.get(channel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_is_positional() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let m = Measurement::from_channels(values);
        assert_eq!(m.pm1_mass, 1.0);
        assert_eq!(m.pm10_mass, 4.0);
        assert_eq!(m.pm0_5_count, 5.0);
        assert_eq!(m.pm10_count, 9.0);
        assert_eq!(m.typical_particle_size, 10.0);

        let collected: Vec<f32> = m.channels().map(|(_, v)| v).collect();
        assert_eq!(collected, values);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Channel::Pm2_5Mass.name(), "pm2_5_mass");
        assert_eq!(Channel::Pm2_5Mass.unit(), "µg/m³");
        assert_eq!(Channel::Pm0_5Count.name(), "pm0_5_num");
        assert_eq!(Channel::Pm0_5Count.unit(), "particles/cm³");
        assert_eq!(Channel::TypicalParticleSize.to_string(), "particle_size");
        assert_eq!(Channel::TypicalParticleSize.unit(), "µm");
    }

    #[test]
    fn test_channel_names_are_unique() {
        let mut names: Vec<&str> = Channel::ALL.iter().map(Channel::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CHANNEL_COUNT);
    }
}
