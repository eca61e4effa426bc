//! Method assembly: the fixed CRUD methods, the listing method chosen by
//! the filter policy, and one forwarding method per endpoint member.

use crate::code::{CodeArg, CodeBlock};
use crate::entity::{EndpointMember, EndpointParam, EntityConfig, FilterSpec};
use crate::error::GenerationError;
use crate::metadata::FieldResolver;
use crate::method::MethodBuilder;
use crate::model::{FailureKind, MethodDescriptor, ParameterDescriptor};
use crate::naming::{to_snake_case, AccessorStyle};
use crate::params::{self, ENTITY, ID, PAGE, PAGE_SIZE};

pub const SAVE: &str = "save";
pub const ONE: &str = "one";
pub const ALL: &str = "all";
pub const ALL_BY_FILTER: &str = "allByFilter";
pub const DELETE: &str = "delete";

/// Local holding the resolved page window.
const WINDOW: &str = "window";

/// Assemble every method of the service, in output order:
/// `save`, `one`, `all`/`allByFilter`, `delete`, then the endpoint methods
/// in input order.
pub fn assemble_methods<R: FieldResolver + ?Sized>(
    crud: &EntityConfig,
    id_type: &str,
    endpoints: &[EndpointMember],
    resolver: &R,
    accessor_style: AccessorStyle,
) -> Result<Vec<MethodDescriptor>, GenerationError> {
    let entity = crud.name.as_str();
    if entity.is_empty() {
        return Err(GenerationError::EmptyEntityName);
    }

    let mut methods = Vec::with_capacity(4 + endpoints.len());
    methods.push(save(entity)?);
    methods.push(one(entity, id_type)?);
    methods.push(match &crud.filter {
        FilterSpec::None => simple_all(crud.pagination)?,
        _ => filterable_all(crud, resolver)?,
    });
    methods.push(delete(id_type)?);

    for member in endpoints {
        if member.owner().is_empty() {
            return Err(GenerationError::MissingOwner {
                entity: entity.to_string(),
                member: member.name().to_string(),
            });
        }
        let method = match member {
            EndpointMember::Field { name, owner } => {
                field_endpoint(name, owner, id_type, accessor_style)?
            }
            EndpointMember::Callable {
                name,
                owner,
                params,
            } => callable_endpoint(name, owner, params, id_type)?,
        };
        methods.push(method);
    }

    tracing::debug!(
        entity,
        methods = methods.len(),
        pagination = crud.pagination,
        "Assembled service methods"
    );
    Ok(methods)
}

/// Resolve the filter spec into `(field, declared type)` pairs.
///
/// The wildcard reads the entity's non-transient fields now, at generation
/// time; fields added to the entity later only appear after regeneration.
pub fn resolve_filter_fields<R: FieldResolver + ?Sized>(
    crud: &EntityConfig,
    resolver: &R,
) -> Result<Vec<(String, String)>, GenerationError> {
    let names = match &crud.filter {
        FilterSpec::None => return Ok(Vec::new()),
        FilterSpec::Wildcard => resolver.non_transient_fields(),
        FilterSpec::Fields(fields) => fields.clone(),
    };

    names
        .into_iter()
        .map(|field| match resolver.field_type(&field) {
            Some(ty) => Ok((field, ty)),
            None => Err(GenerationError::UnknownFilterField {
                entity: crud.name.clone(),
                field,
            }),
        })
        .collect()
}

fn save(entity: &str) -> Result<MethodDescriptor, GenerationError> {
    MethodBuilder::new(SAVE)
        .param(params::entity_param(entity))
        .expr(CodeBlock::new(
            "ServiceResponse::ok(self.repository.save(&$N).await?)",
            [CodeArg::name(ENTITY)],
        ))
        .build()
}

fn one(entity: &str, id_type: &str) -> Result<MethodDescriptor, GenerationError> {
    MethodBuilder::new(ONE)
        .param(params::id_param(id_type))
        .failure(FailureKind::NotFound)
        .expr(lookup(entity, "", []))
        .build()
}

fn delete(id_type: &str) -> Result<MethodDescriptor, GenerationError> {
    MethodBuilder::new(DELETE)
        .param(params::id_param(id_type))
        .statement(CodeBlock::new(
            "self.repository.delete_by_id(&$N).await?",
            [CodeArg::name(ID)],
        ))
        .expr(CodeBlock::of("Ok(ServiceResponse::no_content())"))
        .build()
}

fn simple_all(pagination: bool) -> Result<MethodDescriptor, GenerationError> {
    let builder = MethodBuilder::new(ALL);
    if !pagination {
        return builder
            .expr(CodeBlock::of(
                "ServiceResponse::ok(self.repository.find_all().await?)",
            ))
            .build();
    }

    add_pagination(builder, WINDOW)
        .expr(CodeBlock::new(
            "ServiceResponse::ok(self.repository.find_all_paged(&$N).await?)",
            [CodeArg::name(WINDOW)],
        ))
        .build()
}

fn filterable_all<R: FieldResolver + ?Sized>(
    crud: &EntityConfig,
    resolver: &R,
) -> Result<MethodDescriptor, GenerationError> {
    let fields = resolve_filter_fields(crud, resolver)?;
    let filters: Vec<ParameterDescriptor> = fields
        .iter()
        .map(|(field, ty)| params::filter_param(field, ty))
        .collect();

    let mut placeholders: Vec<&str> = vec!["$N"; filters.len()];
    let mut args: Vec<CodeArg> = filters.iter().map(|p| CodeArg::name(&p.name)).collect();

    let mut builder = MethodBuilder::new(ALL_BY_FILTER).params(filters.iter().cloned());
    if crud.pagination {
        let window = local_name(WINDOW, &filters);
        builder = add_pagination(builder, &window);
        placeholders.push("&$N");
        args.push(CodeArg::name(window));
    }

    builder
        .expr(CodeBlock::new(
            format!(
                "ServiceResponse::ok(self.repository.all_by_filter({}).await?)",
                placeholders.join(", ")
            ),
            args,
        ))
        .build()
}

/// Append `page`/`pageSize` and resolve them into a window.
///
/// The window is unrestricted unless *both* parameters are present; one
/// missing parameter resets the other as well.
fn add_pagination(builder: MethodBuilder, window: &str) -> MethodBuilder {
    builder
        .param(params::page_param())
        .param(params::page_size_param())
        .begin_block(CodeBlock::new(
            "let $N = if let (Some($N), Some($N)) = ($N, $N)",
            [
                CodeArg::name(window),
                CodeArg::name(PAGE),
                CodeArg::name(PAGE_SIZE),
                CodeArg::name(PAGE),
                CodeArg::name(PAGE_SIZE),
            ],
        ))
        .expr(CodeBlock::new(
            "PageWindow::new($N, $N)",
            [CodeArg::name(PAGE), CodeArg::name(PAGE_SIZE)],
        ))
        .next_block(CodeBlock::of("else"))
        .expr(CodeBlock::of("PageWindow::unrestricted()"))
        .end_block(true)
}

fn field_endpoint(
    name: &str,
    owner: &str,
    id_type: &str,
    style: AccessorStyle,
) -> Result<MethodDescriptor, GenerationError> {
    let accessor = style.accessor(name);
    MethodBuilder::new(name)
        .param(params::id_param(id_type))
        .failure(FailureKind::NotFound)
        .expr(lookup(owner, accessor.format(), accessor.args().to_vec()))
        .build()
}

fn callable_endpoint(
    name: &str,
    owner: &str,
    callable_params: &[EndpointParam],
    id_type: &str,
) -> Result<MethodDescriptor, GenerationError> {
    let forwarded: Vec<ParameterDescriptor> = callable_params
        .iter()
        .map(|p| params::endpoint_param(&p.name, &p.ty))
        .collect();

    let call = format!(".$L({})", vec!["$N"; forwarded.len()].join(", "));
    let mut args = vec![CodeArg::literal(name)];
    args.extend(forwarded.iter().map(|p| CodeArg::name(&p.name)));

    MethodBuilder::new(name)
        .param(params::id_param(id_type))
        .params(forwarded)
        .failure(FailureKind::NotFound)
        .expr(lookup(owner, &call, args))
        .build()
}

/// Look the entity up by `id`, failing with `NotFound` carrying `owner`,
/// then apply `tail` to the found value.
fn lookup(owner: &str, tail: &str, tail_args: impl IntoIterator<Item = CodeArg>) -> CodeBlock {
    let mut args = vec![
        CodeArg::name(ID),
        CodeArg::string(owner),
        CodeArg::name(ID),
    ];
    args.extend(tail_args);
    CodeBlock::new(
        format!(
            "ServiceResponse::ok(self.repository.find_by_id(&$N).await?\
             .ok_or_else(|| ServiceError::not_found($S, &$N))?{tail})"
        ),
        args,
    )
}

/// A local variable name that does not shadow any parameter.
///
/// Parameters are compared in their rendered casing, so `Window` takes
/// `window` as well.
fn local_name(base: &str, params: &[ParameterDescriptor]) -> String {
    let mut name = base.to_string();
    while params.iter().any(|p| to_snake_case(&p.name) == name) {
        name.push('_');
    }
    name
}
