//! Calibration of the reference pressure sensor.
//!
//! 91 points from 100.00 to 1000.00 in steps of 10.00, covering ADC values
//! 1696 to 14073.

use crate::table::{CalibrationEntry, CalibrationTable};

#[rustfmt::skip]
const REFERENCE_ENTRIES: [CalibrationEntry; 91] = [
    CalibrationEntry::new( 10000,  1696),
    CalibrationEntry::new( 11000,  1909),
    CalibrationEntry::new( 12000,  2118),
    CalibrationEntry::new( 13000,  2272),
    CalibrationEntry::new( 14000,  2366),
    CalibrationEntry::new( 15000,  2448),
    CalibrationEntry::new( 16000,  2570),
    CalibrationEntry::new( 17000,  2745),
    CalibrationEntry::new( 18000,  2931),
    CalibrationEntry::new( 19000,  3073),
    CalibrationEntry::new( 20000,  3151),
    CalibrationEntry::new( 21000,  3200),
    CalibrationEntry::new( 22000,  3278),
    CalibrationEntry::new( 23000,  3411),
    CalibrationEntry::new( 24000,  3573),
    CalibrationEntry::new( 25000,  3706),
    CalibrationEntry::new( 26000,  3777),
    CalibrationEntry::new( 27000,  3808),
    CalibrationEntry::new( 28000,  3853),
    CalibrationEntry::new( 29000,  3955),
    CalibrationEntry::new( 30000,  4100),
    CalibrationEntry::new( 31000,  4236),
    CalibrationEntry::new( 32000,  4316),
    CalibrationEntry::new( 33000,  4348),
    CalibrationEntry::new( 34000,  4382),
    CalibrationEntry::new( 35000,  4468),
    CalibrationEntry::new( 36000,  4610),
    CalibrationEntry::new( 37000,  4762),
    CalibrationEntry::new( 38000,  4871),
    CalibrationEntry::new( 39000,  4927),
    CalibrationEntry::new( 40000,  4971),
    CalibrationEntry::new( 41000,  5058),
    CalibrationEntry::new( 42000,  5210),
    CalibrationEntry::new( 43000,  5390),
    CalibrationEntry::new( 44000,  5541),
    CalibrationEntry::new( 45000,  5639),
    CalibrationEntry::new( 46000,  5710),
    CalibrationEntry::new( 47000,  5812),
    CalibrationEntry::new( 48000,  5979),
    CalibrationEntry::new( 49000,  6190),
    CalibrationEntry::new( 50000,  6389),
    CalibrationEntry::new( 51000,  6534),
    CalibrationEntry::new( 52000,  6641),
    CalibrationEntry::new( 53000,  6762),
    CalibrationEntry::new( 54000,  6943),
    CalibrationEntry::new( 55000,  7177),
    CalibrationEntry::new( 56000,  7414),
    CalibrationEntry::new( 57000,  7604),
    CalibrationEntry::new( 58000,  7743),
    CalibrationEntry::new( 59000,  7877),
    CalibrationEntry::new( 60000,  8060),
    CalibrationEntry::new( 61000,  8302),
    CalibrationEntry::new( 62000,  8560),
    CalibrationEntry::new( 63000,  8778),
    CalibrationEntry::new( 64000,  8938),
    CalibrationEntry::new( 65000,  9074),
    CalibrationEntry::new( 66000,  9243),
    CalibrationEntry::new( 67000,  9470),
    CalibrationEntry::new( 68000,  9726),
    CalibrationEntry::new( 69000,  9954),
    CalibrationEntry::new( 70000, 10119),
    CalibrationEntry::new( 71000, 10244),
    CalibrationEntry::new( 72000, 10383),
    CalibrationEntry::new( 73000, 10577),
    CalibrationEntry::new( 74000, 10810),
    CalibrationEntry::new( 75000, 11028),
    CalibrationEntry::new( 76000, 11187),
    CalibrationEntry::new( 77000, 11292),
    CalibrationEntry::new( 78000, 11394),
    CalibrationEntry::new( 79000, 11542),
    CalibrationEntry::new( 80000, 11739),
    CalibrationEntry::new( 81000, 11937),
    CalibrationEntry::new( 82000, 12085),
    CalibrationEntry::new( 83000, 12170),
    CalibrationEntry::new( 84000, 12237),
    CalibrationEntry::new( 85000, 12340),
    CalibrationEntry::new( 86000, 12498),
    CalibrationEntry::new( 87000, 12675),
    CalibrationEntry::new( 88000, 12815),
    CalibrationEntry::new( 89000, 12893),
    CalibrationEntry::new( 90000, 12938),
    CalibrationEntry::new( 91000, 13007),
    CalibrationEntry::new( 92000, 13135),
    CalibrationEntry::new( 93000, 13299),
    CalibrationEntry::new( 94000, 13444),
    CalibrationEntry::new( 95000, 13531),
    CalibrationEntry::new( 96000, 13575),
    CalibrationEntry::new( 97000, 13631),
    CalibrationEntry::new( 98000, 13744),
    CalibrationEntry::new( 99000, 13908),
    CalibrationEntry::new(100000, 14073),
];

/// The reference calibration table.
pub static REFERENCE_TABLE: CalibrationTable = CalibrationTable::new(&REFERENCE_ENTRIES);
