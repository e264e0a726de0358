//! `std::ops` overloads layered on top of the `Result`-returning methods, for
//! ergonomic use. These panic on the error conditions a native integer
//! operator could not recover from either (division by zero, shift/size
//! overflow), mirroring fixed-width integer `Div`/`Rem` impls elsewhere
//! which panic rather than return `Result`.

use super::{Int, Shift};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

macro_rules! forward_binary {
    ($trait:ident, $method:ident, $eq_method:ident) => {
        // `Int` is heap-backed and not `Copy`, unlike
        // fixed-width structs (whose single `impl Trait for Int64` by-value
        // form was enough on its own); providing both owned and by-ref forms
        // here lets callers choose whether to consume an operand.
        impl $trait<Int> for Int {
            type Output = Int;
            fn $method(self, rhs: Int) -> Int {
                let mut out = self;
                out.$eq_method(&rhs).expect("arithmetic operation failed");
                out
            }
        }

        impl $trait<&Int> for Int {
            type Output = Int;
            fn $method(self, rhs: &Int) -> Int {
                let mut out = self;
                out.$eq_method(rhs).expect("arithmetic operation failed");
                out
            }
        }

        impl $trait<&Int> for &Int {
            type Output = Int;
            fn $method(self, rhs: &Int) -> Int {
                let mut out = self.clone();
                out.$eq_method(rhs).expect("arithmetic operation failed");
                out
            }
        }
    };
}

forward_binary!(Add, add, add_eq);
forward_binary!(Sub, sub, sub_eq);
forward_binary!(Mul, mul, mul_eq);
forward_binary!(Div, div, div_eq);
forward_binary!(Rem, rem, mod_eq);
forward_binary!(BitAnd, bitand, and_eq);
forward_binary!(BitOr, bitor, or_eq);
forward_binary!(BitXor, bitxor, xor_eq);

impl Neg for Int {
    type Output = Int;
    fn neg(mut self) -> Int {
        self.neg_eq().expect("negation failed");
        self
    }
}

impl Neg for &Int {
    type Output = Int;
    fn neg(self) -> Int {
        let mut out = self.clone();
        out.neg_eq().expect("negation failed");
        out
    }
}

impl Not for Int {
    type Output = Int;
    fn not(mut self) -> Int {
        self.not_eq().expect("operand has been cleared");
        self
    }
}

impl Not for &Int {
    type Output = Int;
    fn not(self) -> Int {
        let mut out = self.clone();
        out.not_eq().expect("operand has been cleared");
        out
    }
}

impl Shl<Shift> for Int {
    type Output = Int;
    fn shl(mut self, n: Shift) -> Int {
        self.lshift_eq(n).expect("left shift failed");
        self
    }
}

impl Shl<Shift> for &Int {
    type Output = Int;
    fn shl(self, n: Shift) -> Int {
        let mut out = self.clone();
        out.lshift_eq(n).expect("left shift failed");
        out
    }
}

impl Shr<Shift> for Int {
    type Output = Int;
    fn shr(mut self, n: Shift) -> Int {
        self.rshift_eq(n).expect("right shift failed");
        self
    }
}

impl Shr<Shift> for &Int {
    type Output = Int;
    fn shr(self, n: Shift) -> Int {
        let mut out = self.clone();
        out.rshift_eq(n).expect("right shift failed");
        out
    }
}
