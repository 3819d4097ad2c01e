use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The fields selectable on this type, or `None` if this type cannot
    /// have a selection set of its own fields (scalars, enums, unions and
    /// input objects).
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(iface_type) => Some(iface_type.fields()),
            Self::Object(obj_type) => Some(obj_type.fields()),
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::InputObject(_)
                | Self::Int
                | Self::Scalar(_)
                | Self::String
                | Self::Union(_) => None,
        }
    }

    /// Indicates whether a field returning this type must carry a selection
    /// set (objects, interfaces and unions).
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Indicates whether a field returning this type is a leaf in a selection
    /// tree (scalars and enums).
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar(_)
                | Self::String,
        )
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
