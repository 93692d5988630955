//! Ordered sequences, sets and maps as D-Bus arrays.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::buf::{Body, BodyBuf};
use crate::error::{Error, ErrorKind, Result};
use crate::load::Loadable;
use crate::marker::{Basic, Marker};
use crate::signature::{SignatureBuilder, SignatureError};
use crate::store::Storable;

fn write_array_signature<T>(builder: &mut SignatureBuilder) -> Result<(), SignatureError>
where
    T: ?Sized + Marker,
{
    builder.open_array()?;
    T::write_signature(builder)?;
    builder.close_array();
    Ok(())
}

fn write_dict_signature<K, V>(builder: &mut SignatureBuilder) -> Result<(), SignatureError>
where
    K: Basic,
    V: Marker,
{
    builder.open_array()?;
    builder.open_dict()?;
    K::write_signature(builder)?;
    V::write_signature(builder)?;
    builder.close_dict()?;
    builder.close_array();
    Ok(())
}

/// Store the elements of one array, patching its length word.
fn store_sequence<'value, T, I>(buf: &mut BodyBuf<'_>, items: I) -> Result<()>
where
    T: 'value + Storable,
    I: IntoIterator<Item = &'value T>,
{
    let mut array = buf.write_array(T::ALIGNMENT);

    for item in items {
        item.store_to(array.buf())?;
    }

    array.finish()
}

/// Store the entries of one map as an array of dict entries.
///
/// The iteration order becomes the wire order; it only has to be consistent
/// within this one call.
fn store_entries<'value, K, V, I>(buf: &mut BodyBuf<'_>, entries: I) -> Result<()>
where
    K: 'value + Storable,
    V: 'value + Storable,
    I: IntoIterator<Item = (&'value K, &'value V)>,
{
    let mut array = buf.write_array(8);

    for (key, value) in entries {
        let buf = array.buf();
        buf.align(8);
        key.store_to(buf)?;
        value.store_to(buf)?;
    }

    array.finish()
}

/// Load array elements until the payload length announced by the header is
/// consumed.
fn load_sequence<T, F>(buf: &mut Body<'_>, mut insert: F) -> Result<()>
where
    T: Loadable,
    F: FnMut(T),
{
    let end = buf.load_array_end(T::ALIGNMENT)?;

    while buf.pos() < end {
        insert(T::load_from(buf)?);

        if buf.pos() > end {
            return Err(Error::new(ErrorKind::ArrayLengthMismatch, buf.pos()));
        }
    }

    Ok(())
}

fn load_entries<K, V, F>(buf: &mut Body<'_>, mut insert: F) -> Result<()>
where
    K: Loadable,
    V: Loadable,
    F: FnMut(K, V),
{
    let end = buf.load_array_end(8)?;

    while buf.pos() < end {
        buf.align(8)?;
        let key = K::load_from(buf)?;
        let value = V::load_from(buf)?;
        insert(key, value);

        if buf.pos() > end {
            return Err(Error::new(ErrorKind::ArrayLengthMismatch, buf.pos()));
        }
    }

    Ok(())
}

impl<T> Marker for [T]
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

/// Store a slice as a D-Bus array.
///
/// # Examples
///
/// ```
/// use dbus_codec::write_dbus_binary;
///
/// let mut buf = Vec::new();
/// write_dbus_binary(&[1u32, 2, 3][..], &mut buf)?;
///
/// assert_eq!(buf, [12, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
/// # Ok::<_, dbus_codec::Error>(())
/// ```
impl<T> Storable for [T]
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_sequence(buf, self)
    }
}

impl<T> Marker for Vec<T>
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

impl<T> Storable for Vec<T>
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        self.as_slice().store_to(buf)
    }
}

impl<T> Loadable for Vec<T>
where
    T: Loadable,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = Vec::new();
        load_sequence(buf, |item| out.push(item))?;
        Ok(out)
    }
}

impl<T, const N: usize> Marker for [T; N]
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

impl<T, const N: usize> Storable for [T; N]
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        self.as_slice().store_to(buf)
    }
}

impl<T, const N: usize> Loadable for [T; N]
where
    T: Loadable,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let at = buf.pos();
        let items = Vec::<T>::load_from(buf)?;

        match <[T; N]>::try_from(items) {
            Ok(items) => Ok(items),
            Err(..) => Err(Error::new(ErrorKind::ArrayLengthMismatch, at)),
        }
    }
}

impl<T> Marker for VecDeque<T>
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

impl<T> Storable for VecDeque<T>
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_sequence(buf, self)
    }
}

impl<T> Loadable for VecDeque<T>
where
    T: Loadable,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = VecDeque::new();
        load_sequence(buf, |item| out.push_back(item))?;
        Ok(out)
    }
}

impl<T> Marker for HashSet<T>
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

/// Store a set as a D-Bus array in iteration order.
impl<T> Storable for HashSet<T>
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_sequence(buf, self)
    }
}

impl<T> Loadable for HashSet<T>
where
    T: Loadable + Eq + Hash,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = HashSet::new();
        load_sequence(buf, |item| {
            out.insert(item);
        })?;
        Ok(out)
    }
}

impl<T> Marker for BTreeSet<T>
where
    T: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_array_signature::<T>(builder)
    }
}

impl<T> Storable for BTreeSet<T>
where
    T: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_sequence(buf, self)
    }
}

impl<T> Loadable for BTreeSet<T>
where
    T: Loadable + Ord,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = BTreeSet::new();
        load_sequence(buf, |item| {
            out.insert(item);
        })?;
        Ok(out)
    }
}

impl<K, V> Marker for HashMap<K, V>
where
    K: Basic,
    V: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_dict_signature::<K, V>(builder)
    }
}

/// Store a map as an array of dict entries.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use dbus_codec::signature_of;
///
/// assert_eq!(signature_of::<HashMap<String, u32>>()?, "a{su}");
/// # Ok::<_, dbus_codec::SignatureError>(())
/// ```
impl<K, V> Storable for HashMap<K, V>
where
    K: Basic + Storable,
    V: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_entries(buf, self)
    }
}

impl<K, V> Loadable for HashMap<K, V>
where
    K: Basic + Loadable + Eq + Hash,
    V: Loadable,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = HashMap::new();
        load_entries(buf, |key, value| {
            out.insert(key, value);
        })?;
        Ok(out)
    }
}

impl<K, V> Marker for BTreeMap<K, V>
where
    K: Basic,
    V: Marker,
{
    const ALIGNMENT: usize = 4;

    #[inline]
    fn write_signature(builder: &mut SignatureBuilder) -> Result<(), SignatureError> {
        write_dict_signature::<K, V>(builder)
    }
}

impl<K, V> Storable for BTreeMap<K, V>
where
    K: Basic + Storable,
    V: Storable,
{
    #[inline]
    fn store_to(&self, buf: &mut BodyBuf<'_>) -> Result<()> {
        store_entries(buf, self)
    }
}

impl<K, V> Loadable for BTreeMap<K, V>
where
    K: Basic + Loadable + Ord,
    V: Loadable,
{
    fn load_from(buf: &mut Body<'_>) -> Result<Self> {
        let mut out = BTreeMap::new();
        load_entries(buf, |key, value| {
            out.insert(key, value);
        })?;
        Ok(out)
    }
}
