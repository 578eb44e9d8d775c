//! Car Damage packet (ID 10).

use serde::Serialize;

use crate::cursor::{ByteCursor, read_car_records};
use crate::error::DecodeResult;
use crate::header::HEADER_SIZE;
use crate::NUM_CARS;

/// Size of one CarDamageData entry.
pub const CAR_DAMAGE_ENTRY_SIZE: usize = 42;
/// Full Car Damage packet size.
pub const CAR_DAMAGE_PACKET_SIZE: usize = HEADER_SIZE + NUM_CARS * CAR_DAMAGE_ENTRY_SIZE;

/// Tyre wear for a single car, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CarDamageData {
    pub tyres_wear_fl: f32,
    pub tyres_wear_fr: f32,
    pub tyres_wear_rl: f32,
    pub tyres_wear_rr: f32,
}

impl CarDamageData {
    /// Reads one entry, consuming exactly [`CAR_DAMAGE_ENTRY_SIZE`] bytes.
    ///
    /// The wire array is ordered RL, RR, FL, FR.
    pub fn read(r: &mut ByteCursor<'_>) -> DecodeResult<Self> {
        r.record("CarDamageData", CAR_DAMAGE_ENTRY_SIZE, |r| {
            let tyres_wear_rl = r.f32_le()?;
            let tyres_wear_rr = r.f32_le()?;
            let tyres_wear_fl = r.f32_le()?;
            let tyres_wear_fr = r.f32_le()?;
            r.skip(4)?; // tyresDamage[4]
            r.skip(4)?; // brakesDamage[4]
            r.skip(1)?; // frontLeftWingDamage
            r.skip(1)?; // frontRightWingDamage
            r.skip(1)?; // rearWingDamage
            r.skip(1)?; // floorDamage
            r.skip(1)?; // diffuserDamage
            r.skip(1)?; // sidepodDamage
            r.skip(1)?; // drsFault
            r.skip(1)?; // ersFault
            r.skip(1)?; // gearBoxDamage
            r.skip(1)?; // engineDamage
            r.skip(1)?; // engineMGUHWear
            r.skip(1)?; // engineESWear
            r.skip(1)?; // engineCEWear
            r.skip(1)?; // engineICEWear
            r.skip(1)?; // engineMGUKWear
            r.skip(1)?; // engineTCWear
            r.skip(1)?; // engineBlown
            r.skip(1)?; // engineSeized

            Ok(Self {
                tyres_wear_fl,
                tyres_wear_fr,
                tyres_wear_rl,
                tyres_wear_rr,
            })
        })
    }

    /// Reads all 22 entries.
    pub fn read_all(r: &mut ByteCursor<'_>) -> DecodeResult<Vec<Self>> {
        read_car_records(r, Self::read)
    }
}
