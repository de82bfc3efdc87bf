//! The typed collection value.

use std::fmt;

use tracing::debug;
use typeseq_foundation::{
    Error, ErrorContext, LtVec, Result, Type, TypeRegistry, Value, guard,
};

use crate::index;

/// An ordered, homogeneously-typed, persistent sequence of values.
///
/// Every element conforms to the collection's declared [`Type`]; this is
/// checked whenever values enter the collection. Cloning is O(1) and all
/// operations that change membership return a new collection, leaving the
/// receiver untouched.
///
/// The two exceptions are [`Collection::insert_in_place`] and
/// [`Collection::insert_range_in_place`], which splice into the receiver's
/// own storage. Collections derived earlier are unaffected by them, since
/// storage is copy-on-write.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection {
    ty: Type,
    items: LtVec<Value>,
}

impl Collection {
    /// Creates a collection of `ty`, validating every initial item.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error naming the first item that does not
    /// conform to `ty`.
    pub fn new(ty: Type, items: impl IntoIterator<Item = Value>) -> Result<Self> {
        let items: LtVec<Value> = items.into_iter().collect();
        guard::validate_many(&ty, &items)
            .map_err(|e| e.with_context(context("new", &ty)))?;
        Ok(Self { ty, items })
    }

    /// Creates an empty collection of `ty`.
    #[must_use]
    pub fn empty(ty: Type) -> Self {
        Self {
            ty,
            items: LtVec::new(),
        }
    }

    /// Creates a collection whose type is resolved from `name`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `name` is not a scalar kind or a
    /// class/interface declared in `registry`, or if an item does not conform.
    pub fn named(
        registry: &TypeRegistry,
        name: &str,
        items: impl IntoIterator<Item = Value>,
    ) -> Result<Self> {
        Self::new(registry.resolve(name)?, items)
    }

    /// Creates a collection whose type is inferred from the first item.
    ///
    /// With no items the collection is [`Type::Untyped`].
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if a later item does not conform to
    /// the inferred type.
    pub fn infer(items: impl IntoIterator<Item = Value>) -> Result<Self> {
        let items: LtVec<Value> = items.into_iter().collect();
        Self::new(guard::infer(&items), items)
    }

    /// Wraps items already known to conform to `ty`.
    pub(crate) fn from_validated(ty: Type, items: LtVec<Value>) -> Self {
        Self { ty, items }
    }

    /// Wraps items already known to conform to this collection's type.
    pub(crate) fn derive(&self, items: LtVec<Value>) -> Self {
        Self::from_validated(self.ty.clone(), items)
    }

    /// Builds error context for a failing operation on this collection.
    pub(crate) fn context(&self, operation: &'static str) -> ErrorContext {
        context(operation, &self.ty)
    }

    /// Returns the declared element type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `index` is negative, or an out
    /// of range error if it is past the end.
    pub fn at(&self, index: i64) -> Result<&Value> {
        index::in_bounds(index, self.len())
            .and_then(|index| {
                self.items
                    .get(index)
                    .ok_or_else(|| Error::out_of_range(index, self.len()))
            })
            .map_err(|e| e.with_context(self.context("at")))
    }

    /// Returns the element at `index`, or `None` if there is none.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Returns whether `index` addresses an element.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `index` is negative.
    pub fn index_exists(&self, index: i64) -> Result<bool> {
        let index = index::non_negative(index)
            .map_err(|e| e.with_context(self.context("index_exists")))?;
        Ok(index < self.len())
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_array(&self) -> Vec<Value> {
        self.items.to_vec()
    }

    /// Returns the backing persistent vector.
    ///
    /// The vector is immutable and shares structure with the collection.
    #[must_use]
    pub fn as_lt_vec(&self) -> &LtVec<Value> {
        &self.items
    }

    // =========================================================================
    // In-place mutators
    // =========================================================================

    /// Inserts `item` at `index`, mutating this collection.
    ///
    /// `index` must address an existing element; the item is placed before
    /// it. Collections previously derived from this one are not affected.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for a negative index, an untyped
    /// collection, or a non-conforming item; an out of range error if
    /// `index >= len`. Nothing is changed on error.
    pub fn insert_in_place(&mut self, index: i64, item: impl Into<Value>) -> Result<()> {
        let item = item.into();
        let position = self
            .check_insert(&item, |len| index::in_bounds(index, len))
            .map_err(|e| e.with_context(self.context("insert_in_place")))?;

        self.items.insert(position, item);
        debug!(position, len = self.len(), "inserted in place");
        Ok(())
    }

    /// Inserts `items` starting at `index`, mutating this collection.
    ///
    /// A negative `index` counts from the end and is resolved as
    /// `len + index + 1`, so `-1` appends. The resolved index may equal `len`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for an untyped collection, a
    /// non-conforming item, or a resolved index that is still negative; an
    /// out of range error if the resolved index exceeds `len`. Nothing is
    /// changed on error.
    pub fn insert_range_in_place(
        &mut self,
        index: i64,
        items: impl IntoIterator<Item = Value>,
    ) -> Result<()> {
        let items: Vec<Value> = items.into_iter().collect();
        let resolved = if index < 0 {
            index::signed(self.len()) + index + 1
        } else {
            index
        };

        let position = self
            .check_insert_many(&items, |len| index::insertion_point(resolved, len))
            .map_err(|e| e.with_context(self.context("insert_range_in_place")))?;

        let inserted = items.len();
        self.items.insert_all(position, items);
        debug!(position, inserted, len = self.len(), "inserted range in place");
        Ok(())
    }

    fn check_insert(
        &self,
        item: &Value,
        locate: impl FnOnce(usize) -> Result<usize>,
    ) -> Result<usize> {
        if self.ty.is_untyped() {
            return Err(Error::untyped());
        }
        let position = locate(self.len())?;
        guard::validate_one(&self.ty, item)?;
        Ok(position)
    }

    fn check_insert_many(
        &self,
        items: &[Value],
        locate: impl FnOnce(usize) -> Result<usize>,
    ) -> Result<usize> {
        if self.ty.is_untyped() {
            return Err(Error::untyped());
        }
        let position = locate(self.len())?;
        guard::validate_many(&self.ty, items)?;
        Ok(position)
    }

    // =========================================================================
    // Persistent membership changes
    // =========================================================================

    /// Returns a new collection with `item` appended.
    ///
    /// An untyped collection adopts the type of `item`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `item` does not conform.
    pub fn add(&self, item: impl Into<Value>) -> Result<Self> {
        let item = item.into();
        if self.ty.is_untyped() {
            return Ok(Self::from_validated(
                item.value_type(),
                self.items.push_back(item),
            ));
        }
        guard::validate_one(&self.ty, &item).map_err(|e| e.with_context(self.context("add")))?;
        Ok(self.derive(self.items.push_back(item)))
    }

    /// Returns an empty collection of the same type.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::empty(self.ty.clone())
    }

    /// Returns a new collection without the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `index` is negative, or an out
    /// of range error if it is past the end.
    pub fn remove_at(&self, index: i64) -> Result<Self> {
        let items = index::in_bounds(index, self.len())
            .and_then(|index| {
                self.items
                    .remove(index)
                    .ok_or_else(|| Error::out_of_range(index, self.len()))
            })
            .map_err(|e| e.with_context(self.context("remove_at")))?;
        Ok(self.derive(items))
    }
}

fn context(operation: &'static str, ty: &Type) -> ErrorContext {
    ErrorContext::new()
        .with_operation(operation)
        .with_element_type(ty.clone())
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection<{}> {:?}", self.ty, self.items)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
