/*!
Attributes, attribute structures, and attribute systems.

An [Attribute] is a label paired with a declared, non-empty domain of values.
An [AttributeStructure] is an ordered set of attributes with unique labels.
An [AttributeSystem] is an attribute structure paired with a finite, ordered universe of object identifiers.

These are the immutable configuration of a proof session.
A system is constructed once, wrapped in an [Arc], and referenced read-only by every state built on it.
Two states are comparable only when they reference equal systems.

# Pair order

The (attribute, object) pairs of a system carry a canonical, attribute-major order.
States store one ascription per pair, flat, in this order, so pair indices address ascriptions directly.
*/

use std::sync::Arc;

use crate::{
    structures::value::ValueSet,
    types::err::{self},
};

/// A named attribute with a declared domain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    label: String,
    domain: ValueSet,
}

impl Attribute {
    pub fn new(label: impl Into<String>, domain: ValueSet) -> Self {
        Attribute {
            label: label.into(),
            domain,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn domain(&self) -> &ValueSet {
        &self.domain
    }
}

/// An ordered set of attributes with unique labels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeStructure {
    attributes: Vec<Attribute>,
}

impl AttributeStructure {
    /// A structure over the given attributes, in the given order.
    ///
    /// Duplicate labels are an error.
    pub fn new(
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self, err::StructureError> {
        let attributes: Vec<Attribute> = attributes.into_iter().collect();

        for (position, attribute) in attributes.iter().enumerate() {
            for other in &attributes[position + 1..] {
                if attribute.label() == other.label() {
                    return Err(err::StructureError::DuplicateAttribute(
                        attribute.label().to_owned(),
                    ));
                }
            }
        }

        Ok(AttributeStructure { attributes })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::label)
    }

    /// The attribute with the given label, if declared.
    pub fn attribute(&self, label: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.label() == label)
    }

    /// The position of the given label in the structure's order, if declared.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.label() == label)
    }

    /// The count of attributes in the structure.
    pub fn cardinality(&self) -> usize {
        self.attributes.len()
    }
}

/// An attribute structure paired with a finite universe of objects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeSystem {
    structure: Arc<AttributeStructure>,
    objects: Vec<String>,
}

impl AttributeSystem {
    /// A system over the given structure and objects.
    ///
    /// An empty universe or duplicate object identifiers are errors.
    pub fn new(
        structure: Arc<AttributeStructure>,
        objects: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, err::StructureError> {
        let objects: Vec<String> = objects.into_iter().map(Into::into).collect();

        if objects.is_empty() {
            return Err(err::StructureError::EmptyUniverse);
        }

        for (position, object) in objects.iter().enumerate() {
            if objects[position + 1..].contains(object) {
                return Err(err::StructureError::DuplicateObject(object.clone()));
            }
        }

        Ok(AttributeSystem { structure, objects })
    }

    pub fn structure(&self) -> &AttributeStructure {
        &self.structure
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Whether the given identifier is an object of the universe.
    pub fn has_object(&self, object: &str) -> bool {
        self.objects.iter().any(|o| o == object)
    }

    /// The count of (attribute, object) pairs of the system.
    pub fn pair_count(&self) -> usize {
        self.structure.cardinality() * self.objects.len()
    }

    /// The flat index of the given (attribute, object) pair in canonical, attribute-major order.
    pub fn pair_index(&self, attribute: &str, object: &str) -> Option<usize> {
        let attribute_position = self.structure.position(attribute)?;
        let object_position = self.objects.iter().position(|o| o == object)?;

        Some(attribute_position * self.objects.len() + object_position)
    }

    /// The (attribute, object) pairs of the system, in canonical order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Attribute, &str)> {
        self.structure
            .attributes()
            .iter()
            .flat_map(|attribute| self.objects.iter().map(move |o| (attribute, o.as_str())))
    }
}
