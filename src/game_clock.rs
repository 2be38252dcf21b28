//! In-game clock for PokeMMO, derived from wall-clock time.
//!
//! The game runs four times faster than real time: 15 real seconds make one game
//! minute, so a full game day passes every 6 real hours. Weekday, hour and minute are
//! counted from a fixed instant known to be Monday 00:00 in game. Season, and the
//! legendary roamers, follow the *real* calendar month instead.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use strum::{Display, EnumIter, FromRepr};

/// 2023-12-04T00:00:00Z, an in-game Monday at midnight.
pub const REFERENCE_TIMESTAMP: i64 = 1_701_648_000;

pub const REAL_MILLIS_PER_GAME_MINUTE: i64 = 15_000;
pub const GAME_MINUTES_PER_HOUR: i64 = 60;
pub const GAME_HOURS_PER_DAY: i64 = 24;
pub const GAME_MINUTES_PER_DAY: i64 = GAME_MINUTES_PER_HOUR * GAME_HOURS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Shoal Cave water level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Tide {
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum JohtoRoamer {
    Entei,
    Suicune,
    Raikou,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum KantoRoamer {
    Zapdos,
    Moltres,
    Articuno,
}

// The game cycles the four seasons three times a year.
const SEASONS_BY_MONTH: [Season; 12] = [
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
    Season::Spring,
    Season::Summer,
    Season::Autumn,
    Season::Winter,
];

/// Snapshot of the in-game world state at one real instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    /// Whole game days since the reference instant; negative before it.
    pub days_elapsed: i64,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
    pub season: Season,
    pub tide: Tide,
    pub johto_roamer: JohtoRoamer,
    pub kanto_roamer: KantoRoamer,
}

impl GameStatus {
    /// Computes the game status for a given real-world instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        let elapsed_millis = now.timestamp_millis() - REFERENCE_TIMESTAMP * 1000;
        // Euclidean division floors toward negative infinity, so instants before the
        // reference still land inside the hour, minute and weekday ranges.
        let game_minutes = elapsed_millis.div_euclid(REAL_MILLIS_PER_GAME_MINUTE);
        let days_elapsed = game_minutes.div_euclid(GAME_MINUTES_PER_DAY);
        let hour = game_minutes
            .div_euclid(GAME_MINUTES_PER_HOUR)
            .rem_euclid(GAME_HOURS_PER_DAY) as u8;
        let minute = game_minutes.rem_euclid(GAME_MINUTES_PER_HOUR) as u8;
        let weekday = weekday_for_day(days_elapsed);

        let month = now.month();
        let (johto_roamer, kanto_roamer) = roamers_for_month(month);

        Self {
            days_elapsed,
            weekday,
            hour,
            minute,
            season: season_for_month(month),
            tide: tide_for_hour(hour),
            johto_roamer,
            kanto_roamer,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Day: {}, Time: {:02}:{:02}",
            self.weekday, self.hour, self.minute
        )?;
        writeln!(f, "Season: {}", self.season)?;
        writeln!(f, "Shoal Cave Tide: {}", self.tide)?;
        writeln!(f, "Johto Roamer: {}", self.johto_roamer)?;
        write!(f, "Kanto Roamer: {}", self.kanto_roamer)
    }
}

fn weekday_for_day(days_elapsed: i64) -> Weekday {
    // rem_euclid(7) is always in 0..7, and every value in that range has a variant.
    Weekday::from_repr(days_elapsed.rem_euclid(7) as u8).unwrap_or(Weekday::Monday)
}

/// Season for a real calendar month (1-12). Out-of-range months wrap.
pub fn season_for_month(month: u32) -> Season {
    SEASONS_BY_MONTH[(month as usize + 11) % 12]
}

/// Low tide during game hours [3, 9) and [15, 21), high otherwise.
pub fn tide_for_hour(hour: u8) -> Tide {
    match hour {
        3..=8 | 15..=20 => Tide::Low,
        _ => Tide::High,
    }
}

/// The roaming legendaries for a real calendar month (1-12).
pub fn roamers_for_month(month: u32) -> (JohtoRoamer, KantoRoamer) {
    let index = ((month as i64 - 1).rem_euclid(3)) as u8;
    (
        JohtoRoamer::from_repr(index).unwrap_or(JohtoRoamer::Entei),
        KantoRoamer::from_repr(index).unwrap_or(KantoRoamer::Zapdos),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 4, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_reference_constant_is_a_monday_midnight() {
        let reference = reference();
        assert_eq!(reference.timestamp(), REFERENCE_TIMESTAMP);
        assert_eq!(reference.weekday(), chrono::Weekday::Mon);

        let status = GameStatus::at(reference);
        assert_eq!(status.weekday, Weekday::Monday);
        assert_eq!((status.hour, status.minute), (0, 0));
    }

    #[test]
    fn test_ninety_seconds_is_six_game_minutes() {
        let status = GameStatus::at(reference() + Duration::seconds(90));
        assert_eq!(status.hour, 0);
        assert_eq!(status.minute, 6);
        assert_eq!(status.weekday, Weekday::Monday);
    }

    #[test]
    fn test_six_real_hours_advance_one_game_day() {
        let start = reference() + Duration::seconds(12_345);
        let before = GameStatus::at(start);
        let after = GameStatus::at(start + Duration::hours(6));
        assert_eq!(after.days_elapsed, before.days_elapsed + 1);
        assert_eq!((after.hour, after.minute), (before.hour, before.minute));
        assert_ne!(after.weekday, before.weekday);
    }

    #[test]
    fn test_weekday_wraps_after_seven_game_days() {
        // 7 game days = 42 real hours.
        let status = GameStatus::at(reference() + Duration::hours(42));
        assert_eq!(status.days_elapsed, 7);
        assert_eq!(status.weekday, Weekday::Monday);
        let status = GameStatus::at(reference() + Duration::hours(36));
        assert_eq!(status.weekday, Weekday::Sunday);
    }

    #[rstest]
    #[case(-1)]
    #[case(-15)]
    #[case(-3_600)]
    #[case(-86_400 * 400 - 7)]
    fn test_instants_before_reference_stay_in_range(#[case] offset_seconds: i64) {
        let status = GameStatus::at(reference() + Duration::seconds(offset_seconds));
        assert!(status.hour < 24);
        assert!(status.minute < 60);
        assert!(status.days_elapsed < 0);
    }

    #[test]
    fn test_one_second_before_reference_is_sunday_late_night() {
        let status = GameStatus::at(reference() - Duration::seconds(1));
        assert_eq!(status.weekday, Weekday::Sunday);
        assert_eq!((status.hour, status.minute), (23, 59));
    }

    #[test]
    fn test_hours_and_minutes_stay_in_range_across_a_sweep() {
        let start = reference() - Duration::days(3);
        for step in 0..2_000 {
            let status = GameStatus::at(start + Duration::seconds(step * 977));
            assert!(status.hour < 24, "hour out of range at step {}", step);
            assert!(status.minute < 60, "minute out of range at step {}", step);
        }
    }

    #[test]
    fn test_tide_for_every_hour() {
        for hour in 0u8..24 {
            let expected = if (3..9).contains(&hour) || (15..21).contains(&hour) {
                Tide::Low
            } else {
                Tide::High
            };
            assert_eq!(tide_for_hour(hour), expected, "hour {}", hour);
        }
    }

    #[rstest]
    #[case(1, Season::Spring, JohtoRoamer::Entei, KantoRoamer::Zapdos)]
    #[case(2, Season::Summer, JohtoRoamer::Suicune, KantoRoamer::Moltres)]
    #[case(3, Season::Autumn, JohtoRoamer::Raikou, KantoRoamer::Articuno)]
    #[case(4, Season::Winter, JohtoRoamer::Entei, KantoRoamer::Zapdos)]
    #[case(5, Season::Spring, JohtoRoamer::Suicune, KantoRoamer::Moltres)]
    #[case(6, Season::Summer, JohtoRoamer::Raikou, KantoRoamer::Articuno)]
    #[case(7, Season::Autumn, JohtoRoamer::Entei, KantoRoamer::Zapdos)]
    #[case(8, Season::Winter, JohtoRoamer::Suicune, KantoRoamer::Moltres)]
    #[case(9, Season::Spring, JohtoRoamer::Raikou, KantoRoamer::Articuno)]
    #[case(10, Season::Summer, JohtoRoamer::Entei, KantoRoamer::Zapdos)]
    #[case(11, Season::Autumn, JohtoRoamer::Suicune, KantoRoamer::Moltres)]
    #[case(12, Season::Winter, JohtoRoamer::Raikou, KantoRoamer::Articuno)]
    fn test_month_tables(
        #[case] month: u32,
        #[case] season: Season,
        #[case] johto: JohtoRoamer,
        #[case] kanto: KantoRoamer,
    ) {
        assert_eq!(season_for_month(month), season);
        assert_eq!(roamers_for_month(month), (johto, kanto));
    }

    #[test]
    fn test_season_ignores_game_time() {
        // Same real month, wildly different game times.
        let early = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 30, 17, 43, 11).unwrap();
        let (a, b) = (GameStatus::at(early), GameStatus::at(late));
        assert_eq!(a.season, b.season);
        assert_eq!(a.johto_roamer, b.johto_roamer);
        assert_eq!(a.kanto_roamer, b.kanto_roamer);
    }

    #[test]
    fn test_display_format() {
        let status = GameStatus::at(reference() + Duration::seconds(90));
        assert_eq!(
            status.to_string(),
            "Day: Monday, Time: 00:06\n\
             Season: Winter\n\
             Shoal Cave Tide: High\n\
             Johto Roamer: Raikou\n\
             Kanto Roamer: Articuno"
        );
    }
}
