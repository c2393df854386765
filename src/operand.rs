//! Native operand kinds for width-checked operations.



//		Modules

#[cfg(test)]
#[path = "tests/operand.rs"]
mod tests;

mod sealed {
	//		Sealed																
	/// Restricts [`Operand`](super::Operand) to the two native 64-bit kinds.
	pub trait Sealed {}

	impl Sealed for i64 {}
	impl Sealed for u64 {}
}



//		Traits

//		Operand																	
/// A native 64-bit operand kind.
///
/// Every width-checked operation works on one of two native representations:
/// [`i64`] for the signed kind and [`u64`] for the unsigned kind. The kind is
/// selected at compile time through this trait, so both operands of a binary
/// operation always share a kind, and the signed and unsigned code paths are
/// monomorphised rather than chosen by inspecting values at runtime.
///
/// The conversions here reinterpret raw bits and never change them: a signed
/// value and its unsigned counterpart are the same 64-bit pattern viewed
/// through different lenses. The one exception is [`magnitude()`](Operand::magnitude()),
/// which produces the absolute value.
///
/// This trait is sealed and cannot be implemented outside this crate.
///
pub trait Operand: Copy + Eq + sealed::Sealed {
	/// Whether this operand kind is signed.
	const SIGNED: bool;

	//		from_bits															
	/// Creates a value of this kind from a raw 64-bit pattern.
	#[must_use]
	fn from_bits(bits: u64) -> Self;

	//		magnitude															
	/// The absolute value, as an unsigned 64-bit value.
	///
	/// Total for the signed kind: the magnitude of [`i64::MIN`] is `2^63`.
	///
	#[must_use]
	fn magnitude(self) -> u64;

	//		to_bits																
	/// The raw 64-bit pattern of this value.
	#[must_use]
	fn to_bits(self) -> u64;

	//		as_signed															
	/// Reinterprets the bit pattern as a signed 64-bit value.
	#[expect(clippy::cast_possible_wrap, reason = "Reinterpretation is intended")]
	#[must_use]
	fn as_signed(self) -> i64 {
		self.to_bits() as i64
	}

	//		as_unsigned															
	/// Reinterprets the bit pattern as an unsigned 64-bit value.
	#[must_use]
	fn as_unsigned(self) -> u64 {
		self.to_bits()
	}

	//		from_signed															
	/// Creates a value of this kind from a signed value's bit pattern.
	#[expect(clippy::cast_sign_loss, reason = "Reinterpretation is intended")]
	#[must_use]
	fn from_signed(value: i64) -> Self {
		Self::from_bits(value as u64)
	}

	//		from_unsigned														
	/// Creates a value of this kind from an unsigned value's bit pattern.
	#[must_use]
	fn from_unsigned(value: u64) -> Self {
		Self::from_bits(value)
	}
}

//󰭅		Operand: i64															
impl Operand for i64 {
	const SIGNED: bool = true;

	//		from_bits															
	#[expect(clippy::cast_possible_wrap, reason = "Reinterpretation is intended")]
	fn from_bits(bits: u64) -> Self {
		bits as Self
	}

	//		magnitude															
	fn magnitude(self) -> u64 {
		self.unsigned_abs()
	}

	//		to_bits																
	#[expect(clippy::cast_sign_loss, reason = "Reinterpretation is intended")]
	fn to_bits(self) -> u64 {
		self as u64
	}
}

//󰭅		Operand: u64															
impl Operand for u64 {
	const SIGNED: bool = false;

	//		from_bits															
	fn from_bits(bits: u64) -> Self {
		bits
	}

	//		magnitude															
	fn magnitude(self) -> u64 {
		self
	}

	//		to_bits																
	fn to_bits(self) -> u64 {
		self
	}
}


