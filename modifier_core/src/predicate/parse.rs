//! Parser front ends for both predicate vocabularies

use super::{CompareOp, PredicateError, Statement};
use serde_json::{Map, Value};

const LEGACY_KEYS: [&str; 3] = ["all", "any", "not"];

fn invalid(value: &Value, reason: impl Into<String>) -> PredicateError {
    PredicateError::InvalidShape {
        statement: value.to_string(),
        reason: reason.into(),
    }
}

/// Parse a whole predicate: a statement list, a legacy object, or `null`
pub(super) fn parse_predicate(value: &Value) -> Result<Vec<Statement>, PredicateError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(parse_statement).collect(),
        Value::Object(map) => parse_legacy(value, map),
        other => Err(invalid(
            other,
            "predicate must be a list of statements or an all/any/not object",
        )),
    }
}

/// Legacy form: `{"all": [...], "any": [...], "not": [...]}`
///
/// `all` entries are AND'ed, `any` needs one match (an empty `any` list is
/// no constraint), `not` means none of its entries may match.
fn parse_legacy(
    value: &Value,
    map: &Map<String, Value>,
) -> Result<Vec<Statement>, PredicateError> {
    if let Some(key) = map.keys().find(|k| !LEGACY_KEYS.contains(&k.as_str())) {
        return Err(invalid(value, format!("unknown legacy predicate key `{}`", key)));
    }

    let mut statements = Vec::new();
    if let Some(all) = map.get("all") {
        statements.extend(parse_list("all", all)?);
    }
    if let Some(any) = map.get("any") {
        let any = parse_list("any", any)?;
        if !any.is_empty() {
            statements.push(Statement::Or(any));
        }
    }
    if let Some(not) = map.get("not") {
        let not = parse_list("not", not)?;
        if !not.is_empty() {
            statements.push(Statement::Nor(not));
        }
    }
    Ok(statements)
}

fn parse_list(key: &str, value: &Value) -> Result<Vec<Statement>, PredicateError> {
    match value {
        Value::Array(items) => items.iter().map(parse_statement).collect(),
        other => Err(invalid(other, format!("operator `{}` expects a list", key))),
    }
}

/// Parse one statement: a tag string or a single-key operator object
pub(super) fn parse_statement(value: &Value) -> Result<Statement, PredicateError> {
    match value {
        Value::String(tag) if tag.is_empty() => Err(invalid(value, "empty tag")),
        Value::String(tag) => Ok(Statement::Literal(tag.clone())),
        Value::Object(map) => {
            let mut entries = map.iter();
            let (key, operand) = match (entries.next(), entries.next()) {
                (Some(entry), None) => entry,
                _ => return Err(invalid(value, "operator object must have exactly one key")),
            };
            parse_operator(value, key, operand)
        }
        other => Err(invalid(other, "statement must be a string or an operator object")),
    }
}

fn parse_operator(whole: &Value, key: &str, operand: &Value) -> Result<Statement, PredicateError> {
    match key {
        "and" | "all" => Ok(Statement::And(parse_list(key, operand)?)),
        "or" | "any" => Ok(Statement::Or(parse_list(key, operand)?)),
        "nor" => Ok(Statement::Nor(parse_list(key, operand)?)),
        "nand" => Ok(Statement::Nand(parse_list(key, operand)?)),
        "xor" => Ok(Statement::Xor(parse_list(key, operand)?)),
        // A list under `not` is the legacy "none of" form
        "not" => match operand {
            Value::Array(_) => Ok(Statement::Nor(parse_list(key, operand)?)),
            single => Ok(Statement::not(parse_statement(single)?)),
        },
        _ => match CompareOp::from_key(key) {
            Some(op) => parse_comparison(op, operand),
            None => Err(invalid(whole, format!("unknown operator `{}`", key))),
        },
    }
}

fn parse_comparison(op: CompareOp, operand: &Value) -> Result<Statement, PredicateError> {
    let shape_error = || {
        invalid(
            operand,
            format!("operator `{}` expects [tag-prefix, integer]", op.key()),
        )
    };

    let items = operand.as_array().ok_or_else(shape_error)?;
    match items.as_slice() {
        [Value::String(prefix), Value::Number(number)] if !prefix.is_empty() => {
            let value = number.as_i64().ok_or_else(shape_error)?;
            Ok(Statement::Compare {
                op,
                prefix: prefix.clone(),
                value,
            })
        }
        _ => Err(shape_error()),
    }
}

/// Serialize a statement in the modern vocabulary
pub(super) fn statement_to_value(statement: &Statement) -> Value {
    let list =
        |children: &[Statement]| Value::Array(children.iter().map(statement_to_value).collect());
    let keyed = |key: &str, operand: Value| {
        let mut map = Map::new();
        map.insert(key.to_string(), operand);
        Value::Object(map)
    };

    match statement {
        Statement::Literal(tag) => Value::String(tag.clone()),
        Statement::And(children) => keyed("and", list(children)),
        Statement::Or(children) => keyed("or", list(children)),
        Statement::Not(child) => keyed("not", statement_to_value(child)),
        Statement::Nor(children) => keyed("nor", list(children)),
        Statement::Nand(children) => keyed("nand", list(children)),
        Statement::Xor(children) => keyed("xor", list(children)),
        Statement::Compare { op, prefix, value } => keyed(
            op.key(),
            Value::Array(vec![Value::String(prefix.clone()), Value::from(*value)]),
        ),
    }
}
