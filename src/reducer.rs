//! Action reduction
//!
//! Several request items may describe the same logical action (overloads of
//! one operation with different argument sets). They are grouped by action
//! and merged so every action appears once with a complete argument list.
//!
//! An argument stays required in the merged call only when every member call
//! has it and marks it required. Missing from one variant and explicitly
//! optional in one variant both reduce to optional.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::arg::ArgumentDescriptor;
use crate::call::{CallDescriptor, Method};

/// Accumulates argument occurrences across the member calls of one action.
#[derive(Debug, Clone, Default)]
pub struct ArgumentReducer {
    /// key → occurrences, at most one per member call, in first-seen key order
    occurrences: IndexMap<String, Vec<ArgumentDescriptor>>,
}

impl ArgumentReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the arguments of one member call.
    ///
    /// A key repeated within the same call is counted once.
    pub fn add_call<'a, I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a ArgumentDescriptor>,
    {
        let mut seen = HashSet::new();
        for arg in args {
            if !seen.insert(arg.key.as_str()) {
                continue;
            }
            self.occurrences
                .entry(arg.key.clone())
                .or_default()
                .push(arg.clone());
        }
        self
    }

    /// Number of member calls that carry `key`.
    pub fn member_count(&self, key: &str) -> usize {
        self.occurrences.get(key).map_or(0, Vec::len)
    }

    /// Merged argument set for a group of `call_count` calls.
    ///
    /// Descriptive metadata comes from the first occurrence of each key.
    pub fn reduce(&self, call_count: usize) -> IndexSet<ArgumentDescriptor> {
        self.occurrences
            .values()
            .filter_map(|group| {
                let first = group.first()?;
                let required = group.len() == call_count && group.iter().all(|a| a.required);
                Some(first.with_required(required))
            })
            .collect()
    }
}

/// One canonical call merged from two or more calls sharing an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedCall {
    members: Vec<CallDescriptor>,
    args: IndexSet<ArgumentDescriptor>,
}

impl ReducedCall {
    /// Merge `members`; `None` unless there are at least two.
    pub fn new(members: Vec<CallDescriptor>) -> Option<Self> {
        if members.len() < 2 {
            return None;
        }
        let mut reducer = ArgumentReducer::new();
        for call in &members {
            reducer.add_call(&call.args);
        }
        let args = reducer.reduce(members.len());
        Some(Self { members, args })
    }

    fn head(&self) -> &CallDescriptor {
        // new() guarantees at least two members
        &self.members[0]
    }

    pub fn members(&self) -> &[CallDescriptor] {
        &self.members
    }

    pub fn args(&self) -> &IndexSet<ArgumentDescriptor> {
        &self.args
    }
}

/// A node's canonical call: passed through as-is, or merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Single(CallDescriptor),
    Reduced(ReducedCall),
}

impl Call {
    fn head(&self) -> &CallDescriptor {
        match self {
            Self::Single(call) => call,
            Self::Reduced(reduced) => reduced.head(),
        }
    }

    pub fn name(&self) -> &str {
        &self.head().name
    }

    pub fn method(&self) -> &Method {
        &self.head().method
    }

    pub fn action(&self) -> &str {
        &self.head().action
    }

    pub fn description(&self) -> &[String] {
        &self.head().description
    }

    pub fn args(&self) -> &IndexSet<ArgumentDescriptor> {
        match self {
            Self::Single(call) => &call.args,
            Self::Reduced(reduced) => reduced.args(),
        }
    }

    /// Import names needed by this call's argument annotations.
    pub fn import_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args()
            .iter()
            .flat_map(|a| a.arg_type.imports().iter().copied())
    }
}

/// Group calls by action and merge each multi-member group.
///
/// Output order follows the first occurrence of each action.
pub fn reduce_calls(calls: Vec<CallDescriptor>) -> Vec<Call> {
    let mut groups: IndexMap<String, Vec<CallDescriptor>> = IndexMap::new();
    for call in calls {
        groups.entry(call.action.clone()).or_default().push(call);
    }

    groups
        .into_values()
        .filter_map(|mut group| match group.len() {
            0 => None,
            1 => group.pop().map(Call::Single),
            _ => ReducedCall::new(group).map(Call::Reduced),
        })
        .collect()
}
