//! Type-directed walk over an operation document.
//!
//! The walker keeps an explicit stack of frames, one per open selection set. Each frame knows
//! the type its fields are selected on, so a field only matches the target when it is selected
//! on the target's type, no matter how its name collides with fields of other types.

use crate::path::UsagePathBuilder;
use crate::{OperationDocument, OperationStructureError, UsagePath};
use apollo_parser::cst;
use graphql_apollo_ext::{FieldExt, NameExt, OperationExt, TypeConditionExt};
use graphql_schema::{FieldSignature, SchemaModel};
use std::collections::HashMap;
use std::iter::FusedIterator;

/// Search settings for one target field.
///
/// ```
/// use graphql_schema::{build_schema_model, FieldSignature, SchemaFormat};
/// use graphql_usage::{OperationDocument, UsageLocator};
///
/// let schema = build_schema_model(
///     "type Query { me: User } type User { name: String }",
///     SchemaFormat::Sdl,
/// )?;
/// let target = FieldSignature::parse("User.name")?;
/// let document = OperationDocument::parse("fragment Who on User { name }")?;
///
/// let locator = UsageLocator::new(&schema, &target).with_fragment_definitions(true);
/// let paths: Vec<_> = locator.locate(&document).collect::<Result<_, _>>()?;
/// assert_eq!(paths, vec!["Who.name"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UsageLocator<'a> {
    schema: &'a SchemaModel,
    target: &'a FieldSignature,
    fragment_definitions: bool,
}

impl<'a> UsageLocator<'a> {
    #[must_use]
    pub const fn new(schema: &'a SchemaModel, target: &'a FieldSignature) -> Self {
        Self {
            schema,
            target,
            fragment_definitions: false,
        }
    }

    /// Also walk top-level fragment definitions as roots, after the operations.
    #[must_use]
    pub const fn with_fragment_definitions(mut self, enabled: bool) -> Self {
        self.fragment_definitions = enabled;
        self
    }

    #[must_use]
    pub const fn target(&self) -> &'a FieldSignature {
        self.target
    }

    /// Lazily walk `document`, yielding one path per selection of the target field.
    #[must_use]
    pub fn locate(&self, document: &OperationDocument) -> Usages<'a> {
        Usages::new(*self, document)
    }
}

/// A selection set waiting to be walked from the top of the document.
struct Root {
    prefix: String,
    type_name: Option<String>,
    selection_set: cst::SelectionSet,
    fragment: Option<String>,
}

/// One open selection set.
struct Frame {
    /// Type the selections are resolved against; `None` when the schema can't tell
    enclosing: Option<String>,
    selections: std::vec::IntoIter<cst::Selection>,
    pushed_segment: bool,
    /// Fragment this frame expands, for cycle detection
    fragment: Option<String>,
}

impl Frame {
    fn new(
        enclosing: Option<String>,
        selection_set: &cst::SelectionSet,
        pushed_segment: bool,
        fragment: Option<String>,
    ) -> Self {
        Self {
            enclosing,
            selections: selection_set.selections().collect::<Vec<_>>().into_iter(),
            pushed_segment,
            fragment,
        }
    }
}

/// Iterator over the usages of one target in one document.
///
/// Items come in traversal order: operations (then fragment definitions, if enabled) in
/// document order, depth-first, selections in declaration order. A field's own match comes
/// before matches inside its selection set. After the first error the iterator is exhausted.
pub struct Usages<'a> {
    locator: UsageLocator<'a>,
    fragments: HashMap<String, cst::FragmentDefinition>,
    roots: std::vec::IntoIter<Root>,
    frames: Vec<Frame>,
    path: UsagePathBuilder,
    pending_error: Option<OperationStructureError>,
    finished: bool,
}

impl<'a> Usages<'a> {
    fn new(locator: UsageLocator<'a>, document: &OperationDocument) -> Self {
        let mut fragments = HashMap::new();
        let mut pending_error = None;
        for fragment in document.fragments() {
            let Some(name) = fragment.name_text() else {
                continue;
            };
            if fragments.contains_key(&name) {
                if pending_error.is_none() {
                    pending_error = Some(OperationStructureError::DuplicateFragment(name));
                }
                continue;
            }
            fragments.insert(name, fragment);
        }

        let mut roots = Vec::new();
        for operation in document.operations() {
            let Some(selection_set) = operation.selection_set() else {
                continue;
            };
            let kind = operation.operation_kind();
            roots.push(Root {
                prefix: operation
                    .name_text()
                    .unwrap_or_else(|| kind.keyword().to_string()),
                type_name: locator.schema.root_operation_type(kind).map(str::to_string),
                selection_set,
                fragment: None,
            });
        }
        if locator.fragment_definitions {
            for fragment in document.fragments() {
                let (Some(name), Some(selection_set)) =
                    (fragment.name_text(), fragment.selection_set())
                else {
                    continue;
                };
                roots.push(Root {
                    prefix: name.clone(),
                    type_name: fragment.type_condition_name(),
                    selection_set,
                    fragment: Some(name),
                });
            }
        }

        tracing::debug!(
            target_field = %locator.target,
            roots = roots.len(),
            fragments = fragments.len(),
            "Walking document"
        );

        Self {
            locator,
            fragments,
            roots: roots.into_iter(),
            frames: Vec::new(),
            path: UsagePathBuilder::default(),
            pending_error,
            finished: false,
        }
    }

    fn enter_root(&mut self, root: Root) {
        self.path.push(root.prefix);
        self.frames.push(Frame::new(
            root.type_name,
            &root.selection_set,
            true,
            root.fragment,
        ));
    }

    fn pop_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            if frame.pushed_segment {
                self.path.pop();
            }
        }
    }

    /// Fragments being expanded from the spread of `name` back to `name`, if it is open.
    fn cycle_chain(&self, name: &str) -> Option<Vec<String>> {
        let open: Vec<&str> = self
            .frames
            .iter()
            .filter_map(|frame| frame.fragment.as_deref())
            .collect();
        let start = open.iter().position(|open_name| *open_name == name)?;
        let mut chain: Vec<String> = open[start..].iter().map(|s| (*s).to_string()).collect();
        chain.push(name.to_string());
        Some(chain)
    }

    fn fail(
        &mut self,
        error: OperationStructureError,
    ) -> Option<Result<UsagePath, OperationStructureError>> {
        tracing::debug!(%error, "Stopping walk");
        self.finished = true;
        self.frames.clear();
        self.path.clear();
        Some(Err(error))
    }

    fn visit_field(&mut self, enclosing: Option<&str>, field: &cst::Field) -> Option<UsagePath> {
        let name = field.name_text()?;
        let usage = enclosing
            .is_some_and(|type_name| self.locator.target.matches(type_name, &name))
            .then(|| self.path.finish(&name));

        if let Some(selection_set) = field.selection_set() {
            let return_type = enclosing
                .and_then(|type_name| self.locator.schema.field_type(type_name, &name))
                .map(str::to_string);
            let key = field.response_key().unwrap_or_else(|| name.clone());
            self.path.push(key);
            self.frames
                .push(Frame::new(return_type, &selection_set, true, None));
        }

        if let Some(usage) = &usage {
            tracing::trace!(path = %usage, "Found usage");
        }
        usage
    }

    fn visit_inline_fragment(&mut self, enclosing: Option<String>, inline: &cst::InlineFragment) {
        let Some(selection_set) = inline.selection_set() else {
            return;
        };
        let type_name = inline.type_condition_name().or(enclosing);
        self.frames
            .push(Frame::new(type_name, &selection_set, false, None));
    }

    fn visit_fragment_spread(
        &mut self,
        spread: &cst::FragmentSpread,
    ) -> Result<(), OperationStructureError> {
        let Some(name) = spread.name_text() else {
            return Ok(());
        };
        if let Some(chain) = self.cycle_chain(&name) {
            return Err(OperationStructureError::FragmentCycle { chain });
        }
        let Some(fragment) = self.fragments.get(&name) else {
            return Err(OperationStructureError::UndefinedFragment(name));
        };
        let Some(selection_set) = fragment.selection_set() else {
            return Ok(());
        };
        let type_name = fragment.type_condition_name();
        self.path.push(name.clone());
        self.frames
            .push(Frame::new(type_name, &selection_set, true, Some(name)));
        Ok(())
    }
}

impl Iterator for Usages<'_> {
    type Item = Result<UsagePath, OperationStructureError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(error) = self.pending_error.take() {
            return self.fail(error);
        }

        loop {
            let Some(frame) = self.frames.last_mut() else {
                let Some(root) = self.roots.next() else {
                    self.finished = true;
                    return None;
                };
                self.enter_root(root);
                continue;
            };
            let Some(selection) = frame.selections.next() else {
                self.pop_frame();
                continue;
            };
            let enclosing = frame.enclosing.clone();

            match selection {
                cst::Selection::Field(field) => {
                    if let Some(usage) = self.visit_field(enclosing.as_deref(), &field) {
                        return Some(Ok(usage));
                    }
                }
                cst::Selection::InlineFragment(inline) => {
                    self.visit_inline_fragment(enclosing, &inline);
                }
                cst::Selection::FragmentSpread(spread) => {
                    if let Err(error) = self.visit_fragment_spread(&spread) {
                        return self.fail(error);
                    }
                }
            }
        }
    }
}

impl FusedIterator for Usages<'_> {}

impl std::fmt::Debug for Usages<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Usages")
            .field("target", &self.locator.target)
            .field("depth", &self.frames.len())
            .field("remaining_roots", &self.roots.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
