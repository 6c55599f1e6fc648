//! Dataset header introspection.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// The names and global attributes of a dataset, without any data.
#[derive(Debug, Clone)]
pub struct DatasetHeader {
    /// Dimension names, in file order.
    pub dimensions: Vec<String>,
    /// Variable names, in file order.
    pub variables: Vec<String>,
    /// Global attributes as strings.
    pub global_attributes: HashMap<String, String>,
}

/// Read dimension names, variable names and global attributes.
pub fn read_header(path: &Path) -> Result<DatasetHeader> {
    let file = netcdf::open(path)?;

    let dimensions = file.dimensions().map(|d| d.name().to_string()).collect();
    let variables = file.variables().map(|v| v.name().to_string()).collect();

    let mut global_attributes = HashMap::new();
    for attr in file.attributes() {
        global_attributes.insert(attr.name().to_string(), attr_value_to_string(&attr));
    }

    Ok(DatasetHeader {
        dimensions,
        variables,
        global_attributes,
    })
}

/// Render any attribute value as a string.
pub(crate) fn attr_value_to_string(attr: &netcdf::Attribute<'_>) -> String {
    use netcdf::AttributeValue;

    match attr.value() {
        Ok(AttributeValue::Uchar(v)) => format!("{}", v),
        Ok(AttributeValue::Schar(v)) => format!("{}", v),
        Ok(AttributeValue::Ushort(v)) => format!("{}", v),
        Ok(AttributeValue::Short(v)) => format!("{}", v),
        Ok(AttributeValue::Uint(v)) => format!("{}", v),
        Ok(AttributeValue::Int(v)) => format!("{}", v),
        Ok(AttributeValue::Ulonglong(v)) => format!("{}", v),
        Ok(AttributeValue::Longlong(v)) => format!("{}", v),
        Ok(AttributeValue::Float(v)) => format!("{}", v),
        Ok(AttributeValue::Double(v)) => format!("{}", v),
        Ok(AttributeValue::Str(v)) => v,
        Ok(AttributeValue::Strs(v)) => v.join(", "),
        Ok(other) => format!("{:?}", other),
        Err(_) => format!("{:?}", attr),
    }
}
