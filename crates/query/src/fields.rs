//! The declarative filter dispatcher.
//!
//! Each endpoint contributes one static table of [`FieldMapping`] entries.
//! The dispatcher walks the table in order; for every entry whose
//! parameter is present it coerces the raw value to the entry's kind and
//! invokes the mapped builder operation. Parameter names that appear in
//! no table are ignored, which keeps old clients working when new
//! parameters are added.

use flowtrace_engine::EngineResult;
use flowtrace_engine::query::VariableValue;

use crate::error::QueryError;
use crate::params::ParameterMap;
use crate::variables::{Operator, VariableExpression, VariableScope};

/// Typed builder operation for one parameter. The variant fixes both the
/// expected value shape and the coercion applied to the raw value.
pub enum Setter<Q: ?Sized> {
    /// Single string, passed through unchanged.
    String(fn(&mut Q, String) -> EngineResult<()>),
    /// String list; empty lists are a no-op.
    StringList(fn(&mut Q, Vec<String>) -> EngineResult<()>),
    /// Engine timestamp.
    Date(fn(&mut Q, chrono::DateTime<chrono::FixedOffset>) -> EngineResult<()>),
    /// Signed integer (priority/threshold filters).
    Number(fn(&mut Q, i64) -> EngineResult<()>),
    /// No-argument toggle, invoked only when the value is literally `true`.
    Flag(fn(&mut Q) -> EngineResult<()>),
    /// Variable expression list, dispatched per operator.
    Variables(VariableOps<Q>),
    /// Escape hatch for parameters that depend on other parameters; the
    /// operation sees the whole map.
    WithParams(fn(&ParameterMap, &mut Q) -> Result<(), QueryError>),
}

/// One row of an endpoint's parameter table.
pub struct FieldMapping<Q: ?Sized> {
    /// The wire-level parameter name.
    pub name: &'static str,
    /// The mapped builder operation.
    pub setter: Setter<Q>,
}

/// The seven comparison operations of one variable family.
pub struct VariableOps<Q: ?Sized> {
    /// Error-message wording for unknown comparators.
    pub scope: VariableScope,
    pub eq: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub neq: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub gt: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub gteq: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub lt: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub lteq: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
    pub like: fn(&mut Q, String, VariableValue) -> EngineResult<()>,
}

impl<Q: ?Sized> VariableOps<Q> {
    fn operation(&self, operator: Operator) -> fn(&mut Q, String, VariableValue) -> EngineResult<()> {
        match operator {
            Operator::Eq => self.eq,
            Operator::Neq => self.neq,
            Operator::Gt => self.gt,
            Operator::Gteq => self.gteq,
            Operator::Lt => self.lt,
            Operator::Lteq => self.lteq,
            Operator::Like => self.like,
        }
    }

    /// Dispatches each parsed expression to its comparison operation.
    pub fn apply(
        &self,
        query: &mut Q,
        expressions: Vec<VariableExpression>,
    ) -> EngineResult<()> {
        for expression in expressions {
            let operation = self.operation(expression.operator);
            operation(query, expression.name, expression.value)?;
        }
        Ok(())
    }
}

/// Walks `table` in order and applies every present parameter to `query`.
pub fn apply_filters<Q: ?Sized>(
    params: &ParameterMap,
    table: &[FieldMapping<Q>],
    query: &mut Q,
) -> Result<(), QueryError> {
    for entry in table {
        let Some(raw) = params.get(entry.name) else {
            continue;
        };
        match &entry.setter {
            Setter::String(operation) => operation(query, raw.string(entry.name)?)?,
            Setter::StringList(operation) => {
                let values = raw.string_list(entry.name)?;
                if !values.is_empty() {
                    operation(query, values)?;
                }
            }
            Setter::Date(operation) => operation(query, raw.date(entry.name)?)?,
            Setter::Number(operation) => operation(query, raw.i64(entry.name)?)?,
            Setter::Flag(operation) => {
                if raw.boolean(entry.name)? {
                    operation(query)?;
                }
            }
            Setter::Variables(ops) => {
                let expressions = raw.variable_expressions(entry.name, ops.scope)?;
                ops.apply(query, expressions)?;
            }
            Setter::WithParams(operation) => operation(params, query)?,
        }
    }
    Ok(())
}
