//! The enumerations workload configurations use to say which entities a stage works on.
//!
//! There are three, one per shape of workload: stages that fill types name a type family,
//! stages that fill nodes name a node family, and stages that fill context edges name an edge
//! kind.  Each one maps onto store families with an exhaustive match.
use std::fmt;
use std::str::FromStr;

use lb_core::model::Family;
use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::GenError;

/// Declares a specification enum along with its canonical upper-case names, its wire tags (the
/// declaration order, starting at zero), and the `FromStr`/`TryFrom<i32>`/`Display` impls built
/// on them.
macro_rules! specification {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in wire-tag order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The canonical upper-case name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|spec| spec.as_str() == s)
                    .ok_or_else(|| GenError::invalid_specification(&format!("{} {s:?}", stringify!($name))))
            }
        }

        impl TryFrom<i32> for $name {
            type Error = anyhow::Error;

            fn try_from(tag: i32) -> anyhow::Result<Self> {
                usize::try_from(tag)
                    .ok()
                    .and_then(|i| Self::ALL.get(i).copied())
                    .ok_or_else(|| GenError::invalid_specification(&format!("{} tag {tag}", stringify!($name))))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

specification! {
    /// Which family of types a type-filling stage works on.
    TypeSpecification {
        /// Artifact types.
        ArtifactType => "ARTIFACT_TYPE",
        /// Execution types.
        ExecutionType => "EXECUTION_TYPE",
        /// Context types.
        ContextType => "CONTEXT_TYPE",
    }
}

specification! {
    /// Which family of nodes a node-filling stage works on.
    NodeSpecification {
        /// Artifact nodes.
        Artifact => "ARTIFACT",
        /// Execution nodes.
        Execution => "EXECUTION",
        /// Context nodes.
        Context => "CONTEXT",
    }
}

specification! {
    /// Which kind of context edge an edge-filling stage creates.
    EdgeSpecification {
        /// Artifact to context.
        Attribution => "ATTRIBUTION",
        /// Execution to context.
        Association => "ASSOCIATION",
    }
}

impl TypeSpecification {
    /// The family whose types this specification names.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::ArtifactType => Family::Artifact,
            Self::ExecutionType => Family::Execution,
            Self::ContextType => Family::Context,
        }
    }
}

impl NodeSpecification {
    /// The family whose nodes this specification names.  Nodes of a family are typed by the same
    /// family's types, so this is also the family to read types from.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Artifact => Family::Artifact,
            Self::Execution => Family::Execution,
            Self::Context => Family::Context,
        }
    }
}

impl EdgeSpecification {
    /// The (non-context, context) families an edge of this kind connects.
    #[must_use]
    pub const fn endpoint_families(self) -> (Family, Family) {
        match self {
            Self::Attribution => (Family::Artifact, Family::Context),
            Self::Association => (Family::Execution, Family::Context),
        }
    }
}
