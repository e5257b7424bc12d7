//! Serialization support (feature `serde`).
//!
//! A lane vector serializes as a fixed-length sequence of its lanes in
//! lane order; a complex vector serializes as the real component vector
//! followed by the imaginary one, matching the natural on-disk layout of
//! the split-component representation. Deserialization rejects sequences
//! of the wrong length.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::complex::ComplexVector;
use crate::element::{Float, Int};
use crate::mask::BoolVector;
use crate::register::Repr;
use crate::vector::Vector;

impl<T, const L: usize> Serialize for Vector<T, L>
where
    T: Repr<L> + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(L)?;
        for i in 0..L {
            tuple.serialize_element(&self.get(i))?;
        }
        tuple.end()
    }
}

struct VectorVisitor<T, const L: usize>(PhantomData<T>);

impl<'de, T, const L: usize> Visitor<'de> for VectorVisitor<T, L>
where
    T: Repr<L> + Deserialize<'de>,
{
    type Value = Vector<T, L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {L} lanes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vector::default();
        for i in 0..L {
            let value = seq
                .next_element::<T>()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            out.set(i, value);
        }
        Ok(out)
    }
}

impl<'de, T, const L: usize> Deserialize<'de> for Vector<T, L>
where
    T: Repr<L> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(L, VectorVisitor(PhantomData))
    }
}

impl<M, const L: usize> Serialize for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(L)?;
        for i in 0..L {
            tuple.serialize_element(&self.get(i))?;
        }
        tuple.end()
    }
}

struct BoolVectorVisitor<M, const L: usize>(PhantomData<M>);

impl<'de, M, const L: usize> Visitor<'de> for BoolVectorVisitor<M, L>
where
    M: Int + Repr<L>,
{
    type Value = BoolVector<M, L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {L} boolean lanes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = BoolVector::default();
        for i in 0..L {
            let value = seq
                .next_element::<bool>()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            out.set(i, value);
        }
        Ok(out)
    }
}

impl<'de, M, const L: usize> Deserialize<'de> for BoolVector<M, L>
where
    M: Int + Repr<L>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(L, BoolVectorVisitor(PhantomData))
    }
}

impl<T, const L: usize> Serialize for ComplexVector<T, L>
where
    T: Float + Repr<L> + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Real run first, imaginary run second.
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.re())?;
        tuple.serialize_element(&self.im())?;
        tuple.end()
    }
}

struct ComplexVectorVisitor<T, const L: usize>(PhantomData<T>);

impl<'de, T, const L: usize> Visitor<'de> for ComplexVectorVisitor<T, L>
where
    T: Float + Repr<L> + Deserialize<'de>,
{
    type Value = ComplexVector<T, L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a real and an imaginary component vector")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let re = seq
            .next_element::<Vector<T, L>>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let im = seq
            .next_element::<Vector<T, L>>()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(ComplexVector::from_parts(re, im))
    }
}

impl<'de, T, const L: usize> Deserialize<'de> for ComplexVector<T, L>
where
    T: Float + Repr<L> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, ComplexVectorVisitor(PhantomData))
    }
}
