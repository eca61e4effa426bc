use std::collections::{BTreeSet, HashSet};

use crate::code::{check_body, CodeBlock, Fragment};
use crate::error::GenerationError;
use crate::model::{FailureKind, MethodDescriptor, ParameterDescriptor, ReturnMarker, Visibility};

/// Accumulates the parts of a method, then seals them into a
/// [`MethodDescriptor`].
///
/// ```
/// use svcgen_core::code::{CodeArg, CodeBlock};
/// use svcgen_core::method::MethodBuilder;
/// use svcgen_core::params;
///
/// let method = MethodBuilder::new("delete")
///     .param(params::id_param("i64"))
///     .statement(CodeBlock::new("self.repository.delete_by_id(&$N).await?", [CodeArg::name("id")]))
///     .expr(CodeBlock::of("Ok(ServiceResponse::no_content())"))
///     .build()
///     .unwrap();
/// assert_eq!(method.param_names(), vec!["id"]);
/// ```
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    params: Vec<ParameterDescriptor>,
    failures: BTreeSet<FailureKind>,
    body: Vec<Fragment>,
}

impl MethodBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            failures: BTreeSet::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: ParameterDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = ParameterDescriptor>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn failure(mut self, kind: FailureKind) -> Self {
        self.failures.insert(kind);
        self
    }

    pub fn statement(mut self, code: CodeBlock) -> Self {
        self.body.push(Fragment::Statement(code));
        self
    }

    pub fn expr(mut self, code: CodeBlock) -> Self {
        self.body.push(Fragment::Expr(code));
        self
    }

    pub fn begin_block(mut self, code: CodeBlock) -> Self {
        self.body.push(Fragment::BeginBlock(code));
        self
    }

    pub fn next_block(mut self, code: CodeBlock) -> Self {
        self.body.push(Fragment::NextBlock(code));
        self
    }

    /// Close the innermost block; `semicolon` ends it as a statement.
    pub fn end_block(mut self, semicolon: bool) -> Self {
        self.body.push(Fragment::EndBlock { semicolon });
        self
    }

    /// Seal the method, checking parameter uniqueness and body shape.
    pub fn build(self) -> Result<MethodDescriptor, GenerationError> {
        let mut seen = HashSet::new();
        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                return Err(GenerationError::DuplicateParameter {
                    method: self.name.clone(),
                    name: param.name.clone(),
                });
            }
        }

        check_body(&self.body).map_err(|reason| GenerationError::MalformedBody {
            method: self.name.clone(),
            reason,
        })?;

        Ok(MethodDescriptor {
            name: self.name,
            visibility: Visibility::Public,
            returns: ReturnMarker::Response,
            params: self.params,
            failures: self.failures,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeArg;
    use crate::params;

    #[test]
    fn build_keeps_order() {
        let method = MethodBuilder::new("all")
            .param(params::page_param())
            .param(params::page_size_param())
            .expr(CodeBlock::of("todo()"))
            .build()
            .unwrap();
        assert_eq!(method.param_names(), vec!["page", "pageSize"]);
        assert_eq!(method.visibility, Visibility::Public);
        assert_eq!(method.returns, ReturnMarker::Response);
        assert!(method.failures.is_empty());
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let err = MethodBuilder::new("status")
            .param(params::id_param("i64"))
            .param(params::id_param("i64"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::DuplicateParameter {
                method: "status".into(),
                name: "id".into(),
            }
        );
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = MethodBuilder::new("one")
            .begin_block(CodeBlock::new("if $N", [CodeArg::name("x")]))
            .build()
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedBody { ref method, .. } if method == "one"));
    }

    #[test]
    fn failure_set_deduplicates() {
        let method = MethodBuilder::new("one")
            .failure(FailureKind::NotFound)
            .failure(FailureKind::NotFound)
            .build()
            .unwrap();
        assert_eq!(method.failures.len(), 1);
        assert!(method.declares(FailureKind::NotFound));
    }
}
