//! Emulated integer bit widths.

//	These arithmetic operations are essential parts of the width-emulation
//	logic: intermediate results are deliberately computed at native width and
//	then truncated, with wrapping operations wherever width 64 itself can
//	wrap. We don't want to add checks that would hide the hardware behaviour
//	being modelled.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate hardware integer behaviour")]

//	Truncating division is the domain operation, both for the overflow bounds
//	and for digit extraction.
#![allow(clippy::integer_division, reason = "Truncation is intentional")]

//	All digit lookups are bounded by the radix, which is validated up front.
#![allow(clippy::indexing_slicing, reason = "Digit indices are bounded by the radix")]



//		Modules

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages

use crate::errors::IntegerError;
use crate::operand::Operand;
use core::{
	fmt::{Formatter, self},
	ops::RangeInclusive,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Unexpected, Visitor},
};
use serde_json::Error as JsonError;



//		Constants

/// Digit characters for all supported radixes.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";



//		Structs

//		Masks																	
/// The bit masks of an emulated width.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Masks {
	/// Width mask `2^n - 1` as a signed value.
	pub signed:     i64,

	/// Sign bit mask `2^(n - 1)`.
	pub signed_bit: i64,

	/// Width mask `2^n - 1` as an unsigned value.
	pub unsigned:   u64,
}

//		Ranges																	
/// The representable ranges of an emulated width.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ranges {
	/// Signed range `-(2^(n - 1))..=2^(n - 1) - 1`.
	pub signed:   RangeInclusive<i64>,

	/// Unsigned range `0..=2^n - 1`.
	pub unsigned: RangeInclusive<u64>,
}

//		IntWidth																
/// An emulated integer bit width.
///
/// This type describes an integer width of 1 to 64 bits, layered on top of
/// the native 64-bit integer types, and provides arithmetic and formatting
/// that behave bit-for-bit as they would on a machine where that width
/// existed as a first-class type. It is useful wherever non-native widths
/// have to be modelled precisely: instruction-set emulators, bytecode
/// interpreters, binary-protocol codecs, and compilers implementing custom
/// integer types.
///
/// The ranges and masks of a width are computed once at construction and
/// never change, so a value of this type can be shared freely, including
/// across threads.
///
/// # Operands
///
/// Operations are generic over the [`Operand`] kind: [`i64`] for signed
/// values and [`u64`] for unsigned values. Both operands of a binary
/// operation share a kind, and results are reduced back to the emulated
/// width — truncated for the unsigned kind, truncated and sign-extended for
/// the signed kind.
///
/// # Arithmetic
///
/// The `overflowing_*` operations return the wrapped result at the emulated
/// width together with an overflow flag, following the conventions of the
/// standard integer types:
///
///   1. The result half is always what wrap-around hardware arithmetic at
///      this width would produce.
///   2. The flag is `true` iff the untruncated mathematical result would not
///      fit the width's range.
///   3. Division and remainder by zero do not panic; they report through the
///      overflow flag.
///
/// # Formatting
///
/// [`radix()`](IntWidth::radix()) renders a value in any base from 2 to 36
/// with digit grouping. The bit-aligned bases 2 and 16 show the value's
/// two's-complement bits at this width; all other bases show the
/// sign-magnitude decomposition.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IntWidth {
	/// Width in bits.
	bits:   u32,

	/// Bit masks for this width.
	masks:  Masks,

	/// Representable ranges for this width.
	ranges: Ranges,
}

//󰭅		IntWidth																
impl IntWidth {
	//		Constructors														

	//		new																	
	/// Creates a new [`IntWidth`] for a given number of bits.
	///
	/// The signed and unsigned ranges and the width masks are derived from
	/// the bit count once, here. Width 64 is the native width itself: its
	/// masks cover all bits and its ranges are the full [`i64`] and [`u64`]
	/// ranges, which the wrapping constructions below produce exactly.
	///
	/// # Parameters
	///
	/// * `bits` - The width in bits, `1` to `64`.
	///
	/// # Errors
	///
	/// Returns [`IntegerError::InvalidBitWidth`] if `bits` is outside the
	/// supported range. There is no fallback width.
	///
	pub fn new(bits: u32) -> Result<Self, IntegerError> {
		if !(1..=64).contains(&bits) {
			return Err(IntegerError::InvalidBitWidth(bits));
		}

		let unsigned_mask = if bits == 64 { u64::MAX } else { (1_u64 << bits) - 1 };
		#[expect(clippy::cast_possible_wrap, reason = "Wrap to the sign bit is intended at width 64")]
		let signed_bit    = (1_u64 << (bits - 1)) as i64;
		#[expect(clippy::cast_possible_wrap, reason = "Reinterpretation is intended")]
		let signed_mask   = unsigned_mask as i64;

		Ok(Self {
			bits,
			masks:  Masks {
				signed:     signed_mask,
				signed_bit,
				unsigned:   unsigned_mask,
			},
			ranges: Ranges {
				signed:   signed_bit.wrapping_neg()..=signed_bit.wrapping_sub(1),
				unsigned: 0..=unsigned_mask,
			},
		})
	}

	//		Public methods														

	//		bits																
	/// The width in bits.
	#[must_use]
	pub const fn bits(&self) -> u32 {
		self.bits
	}

	//		from_json															
	/// Creates an [`IntWidth`] from a JSON number.
	///
	/// # Parameters
	///
	/// * `json` - The JSON to parse.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is not a number, or is not a valid bit
	/// width.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		is_in_range															
	/// Checks that a value is representable at this width.
	///
	/// Signed operands are checked against the signed range, unsigned
	/// operands against the unsigned range.
	///
	/// # Parameters
	///
	/// * `value` - The value to check.
	///
	#[must_use]
	pub fn is_in_range<T: Operand>(&self, value: T) -> bool {
		if T::SIGNED {
			self.ranges.signed.contains(&value.as_signed())
		} else {
			self.ranges.unsigned.contains(&value.as_unsigned())
		}
	}

	//		is_negative															
	/// Checks whether a value is signed and negative at this width.
	///
	/// Always `false` for the unsigned kind. For the signed kind this tests
	/// the width's sign bit rather than the native sign, so it is meaningful
	/// for values that are already reduced to the width.
	///
	/// # Parameters
	///
	/// * `value` - The value to check.
	///
	#[must_use]
	pub fn is_negative<T: Operand>(&self, value: T) -> bool {
		T::SIGNED && (value.as_signed() & self.masks.signed_bit) != 0
	}

	//		is_sign_opposite													
	/// Checks whether two values have opposite signs.
	///
	/// Always `false` for the unsigned kind.
	///
	/// # Parameters
	///
	/// * `lhs` - The left-hand value.
	/// * `rhs` - The right-hand value.
	///
	#[must_use]
	pub fn is_sign_opposite<T: Operand>(&self, lhs: T, rhs: T) -> bool {
		T::SIGNED && (lhs.as_signed() ^ rhs.as_signed()) < 0
	}

	//		is_sign_same														
	/// Checks whether two values have the same sign.
	///
	/// Always `true` for the unsigned kind.
	///
	/// # Parameters
	///
	/// * `lhs` - The left-hand value.
	/// * `rhs` - The right-hand value.
	///
	#[must_use]
	pub fn is_sign_same<T: Operand>(&self, lhs: T, rhs: T) -> bool {
		!T::SIGNED || (lhs.as_signed() ^ rhs.as_signed()) >= 0
	}

	//		masks																
	/// The bit masks for this width.
	#[must_use]
	pub const fn masks(&self) -> &Masks {
		&self.masks
	}

	//		overflowing_add														
	/// Addition at the emulated width.
	///
	/// Computes `lhs + rhs`, returning the wrapped result at this width along
	/// with a boolean indicating whether overflow occurred.
	///
	/// Opposite-sign operands and zero operands cannot overflow. Two
	/// positives overflow iff `lhs > max - rhs`; two negatives iff
	/// `lhs < min - rhs`; unsigned operands iff `rhs > max - lhs`.
	///
	/// # Parameters
	///
	/// * `lhs` - The left-hand operand.
	/// * `rhs` - The value to add to `lhs`.
	///
	#[must_use]
	pub fn overflowing_add<T: Operand>(&self, lhs: T, rhs: T) -> (T, bool) {
		if T::SIGNED {
			let lhs    = lhs.as_signed();
			let rhs    = rhs.as_signed();
			let result = T::from_signed(self.to_signed_width(lhs.wrapping_add(rhs)));

			//	Opposite signs cannot overflow
			if (lhs ^ rhs) < 0 {
				return (result, false);
			}

			//	A zero operand cannot overflow
			if lhs == 0 || rhs == 0 {
				return (result, false);
			}

			let max      = *self.ranges.signed.end();
			let min      = *self.ranges.signed.start();
			let overflow =
				(lhs > 0 && lhs > max.wrapping_sub(rhs)) ||
				(lhs < 0 && lhs < min.wrapping_sub(rhs));

			(result, overflow)
		} else {
			let lhs    = lhs.as_unsigned();
			let rhs    = rhs.as_unsigned();
			let result = T::from_unsigned(self.to_unsigned_width(lhs.wrapping_add(rhs)));
			let max    = *self.ranges.unsigned.end();

			(result, rhs > max.wrapping_sub(lhs))
		}
	}

	//		overflowing_div														
	/// Division at the emulated width.
	///
	/// Computes `lhs / rhs`, returning the result along with a boolean
	/// indicating whether overflow occurred.
	///
	/// A zero divisor reports overflow with a result of zero rather than
	/// panicking. The sole arithmetic overflow case is signed `min / -1`,
	/// whose mathematical result exceeds `max` by one; it saturates to `min`,
	/// the hardware trap value. Every other division is exact.
	///
	/// # Parameters
	///
	/// * `lhs` - The dividend.
	/// * `rhs` - The divisor.
	///
	#[must_use]
	pub fn overflowing_div<T: Operand>(&self, lhs: T, rhs: T) -> (T, bool) {
		//	Division by zero
		if rhs.to_bits() == 0 {
			return (T::from_bits(0), true);
		}

		if T::SIGNED {
			let lhs = lhs.as_signed();
			let rhs = rhs.as_signed();
			let min = *self.ranges.signed.start();

			//	min / -1 exceeds max by one
			if lhs == min && rhs == -1 {
				return (T::from_signed(min), true);
			}

			(T::from_signed(self.to_signed_width(lhs.wrapping_div(rhs))), false)
		} else {
			(T::from_unsigned(self.to_unsigned_width(lhs.as_unsigned() / rhs.as_unsigned())), false)
		}
	}

	//		overflowing_mul														
	/// Multiplication at the emulated width.
	///
	/// Computes `lhs * rhs`, returning the wrapped result at this width along
	/// with a boolean indicating whether overflow occurred.
	///
	/// A zero operand never overflows. Signed `min * -1` (either way round)
	/// always does. Otherwise same-sign operands overflow iff the surviving
	/// operand exceeds `max / rhs` in the direction of its sign, and
	/// opposite-sign operands iff it exceeds `min / rhs`; a `-1` factor
	/// cannot overflow once `min * -1` is excluded. Unsigned operands
	/// overflow iff `lhs > max / rhs`.
	///
	/// # Parameters
	///
	/// * `lhs` - The left-hand operand.
	/// * `rhs` - The value to multiply `lhs` by.
	///
	#[must_use]
	pub fn overflowing_mul<T: Operand>(&self, lhs: T, rhs: T) -> (T, bool) {
		//	Multiplication by zero
		if lhs.to_bits() == 0 || rhs.to_bits() == 0 {
			return (T::from_bits(0), false);
		}

		if T::SIGNED {
			let lhs    = lhs.as_signed();
			let rhs    = rhs.as_signed();
			let max    = *self.ranges.signed.end();
			let min    = *self.ranges.signed.start();
			let result = T::from_signed(self.to_signed_width(lhs.wrapping_mul(rhs)));

			//	min * -1 exceeds max by one
			if (lhs == -1 && rhs == min) || (rhs == -1 && lhs == min) {
				return (result, true);
			}

			let overflow = if (lhs ^ rhs) >= 0 {
				//	Same signs: the product is positive, bounded by max
				(lhs > 0 && lhs > max / rhs) || (lhs < 0 && lhs < max / rhs)
			} else if lhs == -1 || rhs == -1 {
				//	A -1 factor negates within range once min * -1 is excluded
				false
			} else if lhs > 0 {
				//	Positive * negative: the product is bounded below by min
				lhs > min / rhs
			} else {
				//	Negative * positive
				lhs < min / rhs
			};

			(result, overflow)
		} else {
			let lhs    = lhs.as_unsigned();
			let rhs    = rhs.as_unsigned();
			let result = T::from_unsigned(self.to_unsigned_width(lhs.wrapping_mul(rhs)));
			let max    = *self.ranges.unsigned.end();

			(result, lhs > max / rhs)
		}
	}

	//		overflowing_rem														
	/// Remainder at the emulated width.
	///
	/// Computes `lhs % rhs`, returning the result along with a boolean
	/// indicating whether overflow occurred.
	///
	/// A zero divisor reports overflow with a result of zero rather than
	/// panicking. Signed `min % -1` reports overflow with a result of `min`,
	/// mirroring the division convention for the same operand pair. Every
	/// other remainder is exact.
	///
	/// # Parameters
	///
	/// * `lhs` - The dividend.
	/// * `rhs` - The divisor.
	///
	#[must_use]
	pub fn overflowing_rem<T: Operand>(&self, lhs: T, rhs: T) -> (T, bool) {
		//	Remainder by zero
		if rhs.to_bits() == 0 {
			return (T::from_bits(0), true);
		}

		if T::SIGNED {
			let lhs = lhs.as_signed();
			let rhs = rhs.as_signed();
			let min = *self.ranges.signed.start();

			//	min % -1: the implied division overflows
			if lhs == min && rhs == -1 {
				return (T::from_signed(min), true);
			}

			(T::from_signed(self.to_signed_width(lhs.wrapping_rem(rhs))), false)
		} else {
			(T::from_unsigned(self.to_unsigned_width(lhs.as_unsigned() % rhs.as_unsigned())), false)
		}
	}

	//		overflowing_shl														
	/// Left shift at the emulated width.
	///
	/// Computes `value << shift`, returning the wrapped result at this width
	/// along with a boolean indicating whether overflow occurred. The flag is
	/// exactly [`shl_overflows()`](IntWidth::shl_overflows()); once every bit
	/// has been shifted out the result is zero.
	///
	/// # Parameters
	///
	/// * `value` - The value to shift.
	/// * `shift` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn overflowing_shl<T: Operand>(&self, value: T, shift: u32) -> (T, bool) {
		let overflow = self.shl_overflows(value, shift);
		let result   = if shift >= 64 {
			T::from_bits(0)
		} else if T::SIGNED {
			T::from_signed(self.to_signed_width(value.as_signed().wrapping_shl(shift)))
		} else {
			T::from_unsigned(self.to_unsigned_width(value.as_unsigned().wrapping_shl(shift)))
		};

		(result, overflow)
	}

	//		overflowing_sub														
	/// Subtraction at the emulated width.
	///
	/// Computes `lhs - rhs`, returning the wrapped result at this width along
	/// with a boolean indicating whether overflow occurred.
	///
	/// Same-sign operands and a zero `rhs` cannot overflow. A positive `lhs`
	/// overflows iff `lhs > max + rhs`; a negative `lhs` iff
	/// `lhs < min + rhs`; unsigned operands iff `lhs < rhs`.
	///
	/// # Parameters
	///
	/// * `lhs` - The left-hand operand.
	/// * `rhs` - The value to subtract from `lhs`.
	///
	#[must_use]
	pub fn overflowing_sub<T: Operand>(&self, lhs: T, rhs: T) -> (T, bool) {
		if T::SIGNED {
			let lhs    = lhs.as_signed();
			let rhs    = rhs.as_signed();
			let result = T::from_signed(self.to_signed_width(lhs.wrapping_sub(rhs)));

			//	Same signs cannot overflow
			if (lhs ^ rhs) >= 0 {
				return (result, false);
			}

			//	A zero subtrahend cannot overflow
			if rhs == 0 {
				return (result, false);
			}

			let max      = *self.ranges.signed.end();
			let min      = *self.ranges.signed.start();
			let overflow =
				(lhs > 0 && lhs > max.wrapping_add(rhs)) ||
				(lhs < 0 && lhs < min.wrapping_add(rhs));

			(result, overflow)
		} else {
			let lhs    = lhs.as_unsigned();
			let rhs    = rhs.as_unsigned();
			let result = T::from_unsigned(self.to_unsigned_width(lhs.wrapping_sub(rhs)));

			(result, lhs < rhs)
		}
	}

	//		radix																
	/// Formats a value in a given base, with digit grouping.
	///
	/// The bit-aligned bases 2 and 16 render the value's two's-complement
	/// bits at this width — all of them for binary, one digit per nibble for
	/// hexadecimal — most-significant digit first, with a leading `-` for
	/// negative signed values. All other bases render the sign-magnitude
	/// decomposition: the absolute value's digits, with a leading `-` when
	/// negative. So at width 12, the value `-100` in base 8 renders as
	/// `-144`, not as the raw two's-complement octal `7634`.
	///
	/// Digits are grouped with `_` separators — groups of 4 for bases 2 and
	/// 16, groups of 3 otherwise — counted from the least-significant digit,
	/// and never before the first digit.
	///
	/// The output buffer is preallocated to the minimum digit count for this
	/// width plus separators and sign.
	///
	/// # Parameters
	///
	/// * `value` - The value to format. Must be representable at this width.
	/// * `radix` - The base to render in, `2` to `36`.
	///
	/// # Errors
	///
	/// Returns [`IntegerError::SignedOutOfRange`] or
	/// [`IntegerError::UnsignedOutOfRange`] if the value does not fit this
	/// width, and [`IntegerError::InvalidRadix`] if the base is unsupported.
	/// The value is checked first.
	///
	pub fn radix<T: Operand>(&self, value: T, radix: u32) -> Result<String, IntegerError> {
		if !self.is_in_range(value) {
			return Err(if T::SIGNED {
				IntegerError::SignedOutOfRange(value.as_signed(), self.ranges.signed.clone(), self.bits)
			} else {
				IntegerError::UnsignedOutOfRange(value.as_unsigned(), self.ranges.unsigned.clone(), self.bits)
			});
		}

		if !(2..=36).contains(&radix) {
			return Err(IntegerError::InvalidRadix(radix));
		}

		//	Two's-complement bits at this width
		let masked = value.to_bits() & self.masks.unsigned;

		//	Minimum digits for this width in this base, separators between
		//	digit groups, and an optional sign
		#[expect(
			clippy::cast_possible_truncation,
			clippy::cast_sign_loss,
			reason = "At most 64 digits"
		)]
		let min_digits = (f64::from(self.bits) / f64::from(radix).log2()).ceil() as u32;
		let group      = if radix == 2 || radix == 16 { 4 } else { 3 };
		let separators = (min_digits - 1) / group;
		let negative   = T::SIGNED && value.as_signed() < 0;
		let mut result = String::with_capacity((min_digits + separators + u32::from(negative)) as usize);

		match radix {
			2  => {
				//	Binary shows every bit of the width
				for i in (0..self.bits).rev() {
					result.push(if (masked >> i) & 1 == 1 { '1' } else { '0' });
					if i % group == 0 && i != 0 {
						result.push('_');
					}
				}
			},
			16 => {
				//	Hexadecimal shows one digit per nibble
				for i in (0..min_digits).rev() {
					result.push(char::from(DIGITS[((masked >> (i * 4)) & 0xF) as usize]));
					if i % group == 0 && i != 0 {
						result.push('_');
					}
				}
			},
			_  => {
				//	Sign-magnitude: extract the absolute value's digits,
				//	least-significant first, then reverse
				let radix         = u64::from(radix);
				let mut magnitude = value.magnitude();
				let mut count     = 0_u32;

				loop {
					if count > 0 && count % group == 0 {
						result.push('_');
					}
					#[expect(clippy::cast_possible_truncation, reason = "Bounded by the radix")]
					result.push(char::from(DIGITS[(magnitude % radix) as usize]));
					magnitude /= radix;
					count     += 1;

					if magnitude == 0 {
						break;
					}
				}

				result = result.chars().rev().collect();
			},
		}

		if negative {
			result.insert(0, '-');
		}

		Ok(result)
	}

	//		ranges																
	/// The representable ranges for this width.
	#[must_use]
	pub const fn ranges(&self) -> &Ranges {
		&self.ranges
	}

	//		shl_overflows														
	/// Checks whether a left shift overflows the emulated width.
	///
	/// A zero value or a zero shift never overflows. A shift of the full
	/// width or more always does — for the signed kind the sign position
	/// itself is out of bounds, so the limit is one lower. Smaller shifts
	/// overflow iff shifting back down by the complementary amount fails to
	/// recover the value's sign extension: `-1` for negative signed values,
	/// `0` otherwise.
	///
	/// # Parameters
	///
	/// * `value` - The value to shift.
	/// * `shift` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn shl_overflows<T: Operand>(&self, value: T, shift: u32) -> bool {
		if value.to_bits() == 0 || shift == 0 {
			return false;
		}

		//	The sign position is not shiftable into for the signed kind
		let adjusted = if T::SIGNED { self.bits - 1 } else { self.bits };

		if shift >= adjusted {
			return true;
		}

		if T::SIGNED {
			let value     = value.as_signed();
			let extension = if value < 0 { -1 } else { 0 };

			(value >> (adjusted - shift)) != extension
		} else {
			(value.as_unsigned() >> (adjusted - shift)) != 0
		}
	}

	//		to_json																
	/// Converts the width to a JSON number.
	///
	/// # Errors
	///
	/// Returns an error if serialisation fails.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_signed_width														
	/// Reduces a native signed value to this width.
	///
	/// Masks off the high bits and sign-extends the result, reinterpreting
	/// the low bits as two's complement at this width regardless of the sign
	/// of the native input. Total: never fails, for any input.
	///
	/// # Parameters
	///
	/// * `value` - The native value to reduce.
	///
	#[must_use]
	pub const fn to_signed_width(&self, value: i64) -> i64 {
		((value & self.masks.signed) ^ self.masks.signed_bit).wrapping_sub(self.masks.signed_bit)
	}

	//		to_unsigned_width													
	/// Reduces a native unsigned value to this width.
	///
	/// Masks off the high bits. Total: never fails, for any input.
	///
	/// # Parameters
	///
	/// * `value` - The native value to reduce.
	///
	#[must_use]
	pub const fn to_unsigned_width(&self, value: u64) -> u64 {
		value & self.masks.unsigned
	}

	//		trailing_zeros														
	/// The number of trailing zero bits in a value at this width.
	///
	/// The value `0` yields the full bit width: within this width there is no
	/// set bit, which is distinct from the native all-zero answer.
	///
	/// # Parameters
	///
	/// * `value` - The value to count trailing zeros of.
	///
	#[must_use]
	pub fn trailing_zeros<T: Operand>(&self, value: T) -> u32 {
		if value.to_bits() == 0 {
			self.bits
		} else {
			value.to_bits().trailing_zeros()
		}
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for IntWidth {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_u32(WidthVisitor)
	}
}

//󰭅		Serialize																
impl Serialize for IntWidth {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_u32(self.bits)
	}
}

//		WidthVisitor															
/// Deserialisation visitor that revalidates the bit width.
struct WidthVisitor;

//󰭅		Visitor for WidthVisitor												
impl Visitor<'_> for WidthVisitor {
	type Value = IntWidth;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a bit width between 1 and 64")
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		let bits = u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))?;
		self.visit_u64(bits)
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		u32::try_from(v).ok()
			.and_then(|bits| IntWidth::new(bits).ok())
			.ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
	}
}


