//! Contains error types used throughout the library.



//		Packages

use core::ops::RangeInclusive;
use thiserror::Error as ThisError;



//		Enums

//		IntegerError															
/// Represents all possible width and formatting errors that can occur.
///
/// Arithmetic overflow is deliberately absent: overflow is an expected
/// outcome reported through the boolean half of each arithmetic result, not
/// an error condition.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum IntegerError {
	/// The requested bit width cannot be emulated on a 64-bit value.
	#[error("Invalid bit width: must be between 1 and 64, received {0}")]
	InvalidBitWidth(u32),

	/// The requested radix is outside the supported bases.
	#[error("Invalid radix: must be between 2 and 36, received {0}")]
	InvalidRadix(u32),

	/// The signed value does not fit the width's signed range.
	#[error("Value {0} out of range for {1:?} of width {2}")]
	SignedOutOfRange(i64, RangeInclusive<i64>, u32),

	/// The unsigned value does not fit the width's unsigned range.
	#[error("Value {0} out of range for {1:?} of width {2}")]
	UnsignedOutOfRange(u64, RangeInclusive<u64>, u32),
}


