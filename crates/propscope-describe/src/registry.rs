//! Describe nodes whose concrete type is only known at runtime.
//!
//! An inspector usually walks a tree of heterogeneous nodes. Registering each
//! [`Inspectable`] type once lets it describe any `&dyn Any` node.
//!
//! # Example
//!
//! ```ignore
//! let registry = Registry::new().with::<Text>().with::<TextState>();
//!
//! let node: &dyn Any = &text;
//! let groups = registry.describe_props(node)?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;

use propscope_types::{InspectorObject, Named};

use crate::describe::{describe_props, describe_state};
use crate::fields::Inspectable;
use crate::{Error, Result};

type PropsFn = fn(&dyn Any) -> Result<Vec<Named<InspectorObject>>>;
type StateFn = fn(&dyn Any) -> Result<Option<Named<InspectorObject>>>;

/// Type-erased describers for one registered type.
#[derive(Clone, Copy)]
struct Describers {
    type_name: &'static str,
    props: PropsFn,
    state: StateFn,
}

/// Per-type registry of field-descriptor tables, keyed by [`TypeId`].
#[derive(Clone, Default)]
pub struct Registry {
    types: HashMap<TypeId, Describers>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`. Registering a type twice has no further effect.
    pub fn register<T: Inspectable + 'static>(&mut self) -> &mut Self {
        let type_name = std::any::type_name::<T>();
        log::debug!("registering {}", type_name);
        self.types.insert(
            TypeId::of::<T>(),
            Describers {
                type_name,
                props: props_of::<T>,
                state: state_of::<T>,
            },
        );
        self
    }

    /// Builder form of [`Registry::register`].
    pub fn with<T: Inspectable + 'static>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn is_registered(&self, node: &dyn Any) -> bool {
        self.types.contains_key(&node.type_id())
    }

    /// Name of the registered type behind `node`.
    pub fn type_name_of(&self, node: &dyn Any) -> Option<&'static str> {
        self.types.get(&node.type_id()).map(|d| d.type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// [`describe_props`] for a node of any registered type.
    pub fn describe_props(&self, node: &dyn Any) -> Result<Vec<Named<InspectorObject>>> {
        (self.lookup(node)?.props)(node)
    }

    /// [`describe_state`] for a state container of any registered type.
    pub fn describe_state(
        &self,
        state: Option<&dyn Any>,
    ) -> Result<Option<Named<InspectorObject>>> {
        match state {
            Some(state) => (self.lookup(state)?.state)(state),
            None => Ok(None),
        }
    }

    fn lookup(&self, node: &dyn Any) -> Result<&Describers> {
        self.types
            .get(&node.type_id())
            .ok_or(Error::UnregisteredType)
    }
}

fn props_of<T: Inspectable + 'static>(node: &dyn Any) -> Result<Vec<Named<InspectorObject>>> {
    describe_props(downcast::<T>(node)?)
}

fn state_of<T: Inspectable + 'static>(state: &dyn Any) -> Result<Option<Named<InspectorObject>>> {
    describe_state(Some(downcast::<T>(state)?))
}

fn downcast<T: 'static>(node: &dyn Any) -> Result<&T> {
    node.downcast_ref::<T>().ok_or(Error::TypeMismatch {
        expected: std::any::type_name::<T>(),
    })
}
