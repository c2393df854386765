//		Packages

use super::*;



//		Tests

mod constants {
	use super::*;

	//		SIGNED																
	#[test]
	fn signed__i64_kind() {
		assert!(<i64 as Operand>::SIGNED);
	}
	#[test]
	fn signed__u64_kind() {
		assert!(!<u64 as Operand>::SIGNED);
	}
}

mod public_methods {
	use super::*;

	//		as_signed															
	#[test]
	fn as_signed__i64() {
		assert_eq!(42_i64.as_signed(),    42);
		assert_eq!((-42_i64).as_signed(), -42);
	}
	#[test]
	fn as_signed__u64_reinterprets() {
		assert_eq!(42_u64.as_signed(),       42);
		assert_eq!(u64::MAX.as_signed(),     -1);
		assert_eq!((1_u64 << 63).as_signed(), i64::MIN);
	}

	//		as_unsigned															
	#[test]
	fn as_unsigned__i64_reinterprets() {
		assert_eq!(42_i64.as_unsigned(),    42);
		assert_eq!((-1_i64).as_unsigned(),  u64::MAX);
		assert_eq!(i64::MIN.as_unsigned(),  1_u64 << 63);
	}
	#[test]
	fn as_unsigned__u64() {
		assert_eq!(42_u64.as_unsigned(),   42);
		assert_eq!(u64::MAX.as_unsigned(), u64::MAX);
	}

	//		from_bits															
	#[test]
	fn from_bits__i64() {
		assert_eq!(<i64 as Operand>::from_bits(42),       42);
		assert_eq!(<i64 as Operand>::from_bits(u64::MAX), -1);
	}
	#[test]
	fn from_bits__u64() {
		assert_eq!(<u64 as Operand>::from_bits(42),       42);
		assert_eq!(<u64 as Operand>::from_bits(u64::MAX), u64::MAX);
	}

	//		from_signed															
	#[test]
	fn from_signed__round_trips() {
		assert_eq!(<i64 as Operand>::from_signed(-42),     -42);
		assert_eq!(<u64 as Operand>::from_signed(-1),      u64::MAX);
		assert_eq!(<u64 as Operand>::from_signed(i64::MIN), 1_u64 << 63);
	}

	//		from_unsigned														
	#[test]
	fn from_unsigned__round_trips() {
		assert_eq!(<u64 as Operand>::from_unsigned(42),       42);
		assert_eq!(<i64 as Operand>::from_unsigned(u64::MAX), -1);
	}

	//		magnitude															
	#[test]
	fn magnitude__i64() {
		assert_eq!(42_i64.magnitude(),    42);
		assert_eq!((-42_i64).magnitude(), 42);
		assert_eq!(0_i64.magnitude(),     0);
	}
	#[test]
	fn magnitude__i64_min_is_total() {
		assert_eq!(i64::MIN.magnitude(), 1_u64 << 63);
	}
	#[test]
	fn magnitude__u64_is_identity() {
		assert_eq!(42_u64.magnitude(),     42);
		assert_eq!(u64::MAX.magnitude(),   u64::MAX);
	}

	//		to_bits																
	#[test]
	fn to_bits__i64() {
		assert_eq!(42_i64.to_bits(),   42);
		assert_eq!((-1_i64).to_bits(), u64::MAX);
	}
	#[test]
	fn to_bits__u64() {
		assert_eq!(42_u64.to_bits(),     42);
		assert_eq!(u64::MAX.to_bits(),   u64::MAX);
	}
}


