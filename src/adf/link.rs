use super::{AbstractDialecticalFramework, AcceptanceCondition, LabelType};
use anyhow::{Context, Result};
use strum_macros::{Display, EnumIter};

/// The type of a link between a parent argument and a child argument.
///
/// A link is attacking if raising the parent from false to true never turns the child from rejected to accepted,
/// and supporting if raising the parent never turns the child from accepted to rejected.
/// Both properties are independent; a link having both is redundant, a link having none is dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum LinkType {
    /// Neither attacking nor supporting.
    Dependent,
    /// Supporting, but not attacking.
    Supporting,
    /// Attacking, but not supporting.
    Attacking,
    /// Both attacking and supporting: the child does not actually depend on the parent.
    Redundant,
}

impl LinkType {
    /// Builds the link type given its attacking and supporting properties.
    pub fn get(attacking: bool, supporting: bool) -> Self {
        match (attacking, supporting) {
            (true, true) => LinkType::Redundant,
            (true, false) => LinkType::Attacking,
            (false, true) => LinkType::Supporting,
            (false, false) => LinkType::Dependent,
        }
    }

    /// Returns `true` for attacking and redundant links.
    pub fn is_attacking(&self) -> bool {
        matches!(self, LinkType::Attacking | LinkType::Redundant)
    }

    /// Returns `true` for supporting and redundant links.
    pub fn is_supporting(&self) -> bool {
        matches!(self, LinkType::Supporting | LinkType::Redundant)
    }

    /// Returns `true` for non-dependent links.
    pub fn is_bipolar(&self) -> bool {
        !self.is_dependent()
    }

    /// Returns `true` for dependent links.
    pub fn is_dependent(&self) -> bool {
        *self == LinkType::Dependent
    }

    /// Returns `true` for redundant links.
    pub fn is_redundant(&self) -> bool {
        *self == LinkType::Redundant
    }
}

/// A link from a parent argument to a child argument, given by their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    parent: usize,
    child: usize,
    link_type: LinkType,
}

impl Link {
    /// Builds a new link.
    pub fn new(parent: usize, child: usize, link_type: LinkType) -> Self {
        Self {
            parent,
            child,
            link_type,
        }
    }

    /// Returns the id of the parent argument.
    pub fn parent(&self) -> usize {
        self.parent
    }

    /// Returns the id of the child argument.
    pub fn child(&self) -> usize {
        self.child
    }

    /// Returns the type of the link.
    pub fn link_type(&self) -> LinkType {
        self.link_type
    }
}

/// A strategy used to compute the type of links.
pub trait LinkStrategy {
    /// Computes the type of the link from the parent to the child owning the acceptance condition.
    ///
    /// An error is returned if the parent does not occur in the acceptance condition.
    fn compute(&self, parent: usize, child_acceptance_condition: &AcceptanceCondition) -> Result<LinkType>;
}

/// The classified links of an ADF.
#[derive(Debug, Clone)]
pub struct LinkTable {
    links: Vec<Link>,
    links_by_child: Vec<Vec<usize>>,
}

impl LinkTable {
    /// Classifies all the links of the ADF using the given strategy.
    pub fn compute<T>(
        adf: &AbstractDialecticalFramework<T>,
        strategy: &dyn LinkStrategy,
    ) -> Result<Self>
    where
        T: LabelType,
    {
        let mut links = vec![];
        let mut links_by_child = vec![vec![]; adf.n_arguments()];
        for child in 0..adf.n_arguments() {
            let acceptance_condition = adf.acceptance_condition_by_id(child);
            for parent in adf.iter_parents(child) {
                let link_type = strategy
                    .compute(parent, acceptance_condition)
                    .with_context(|| {
                        format!(
                            "while computing the type of the link from {} to {}",
                            adf.argument_set().get_argument_by_id(parent),
                            adf.argument_set().get_argument_by_id(child),
                        )
                    })?;
                links_by_child[child].push(links.len());
                links.push(Link::new(parent, child, link_type));
            }
        }
        Ok(Self {
            links,
            links_by_child,
        })
    }

    /// Iterates over all the links.
    pub fn iter(&self) -> impl Iterator<Item = &Link> + '_ {
        self.links.iter()
    }

    /// Iterates over the links which child is the given argument.
    pub fn links_to(&self, child: usize) -> impl Iterator<Item = &Link> + '_ {
        self.links_by_child[child].iter().map(|i| &self.links[*i])
    }

    /// Returns the link between two arguments, if any.
    pub fn link(&self, parent: usize, child: usize) -> Option<&Link> {
        self.links_to(child).find(|l| l.parent == parent)
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` iff there is no link.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the number of dependent links.
    pub fn n_dependent(&self) -> usize {
        self.links.iter().filter(|l| l.link_type.is_dependent()).count()
    }

    /// Returns `true` iff no link is dependent.
    pub fn is_bipolar(&self) -> bool {
        self.links.iter().all(|l| l.link_type.is_bipolar())
    }
}
