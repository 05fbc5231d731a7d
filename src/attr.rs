// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::fmt;
use std::str::FromStr;

use crate::server::ServerGroup;

/// The server group attributes that orchestration code can refer to by their scope file name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute {
    RestUsername,
    RestPassword,
    Name,
    Ram,
    RestPort,
}

impl Attribute {
    /// Look up an attribute by the name it has in the scope file, e.g. `rest_port`.
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "rest_username" => Some(Attribute::RestUsername),
            "rest_password" => Some(Attribute::RestPassword),
            "name" => Some(Attribute::Name),
            "ram" => Some(Attribute::Ram),
            "rest_port" => Some(Attribute::RestPort),
            _ => None,
        }
    }

    /// The name of the field holding this attribute in the planned model.
    pub fn field_key(&self) -> &'static str {
        match self {
            Attribute::RestUsername => "RestUsername",
            Attribute::RestPassword => "RestPassword",
            Attribute::Name => "Name",
            Attribute::Ram => "Ram",
            Attribute::RestPort => "RestPort",
        }
    }

    /// Read this attribute from `group`.
    pub fn get<'a>(&self, group: &'a ServerGroup) -> &'a str {
        match self {
            Attribute::RestUsername => &group.rest_username,
            Attribute::RestPassword => &group.rest_password,
            Attribute::Name => &group.name,
            Attribute::Ram => &group.ram,
            Attribute::RestPort => &group.rest_port,
        }
    }
}

/// Map a scope file attribute name to its field key, or to an empty string when the name is not
/// one of the known attributes.
pub fn to_attr(name: &str) -> &'static str {
    Attribute::resolve(name).map_or("", |attr| attr.field_key())
}

#[derive(Debug, PartialEq)]
pub struct UnknownAttribute(pub String);

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown attribute '{}'", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::resolve(s).ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bucket::BucketLookup, config::ServerConfig};

    #[test]
    fn test_to_attr() {
        assert_eq!(to_attr("rest_username"), "RestUsername");
        assert_eq!(to_attr("rest_password"), "RestPassword");
        assert_eq!(to_attr("name"), "Name");
        assert_eq!(to_attr("ram"), "Ram");
        assert_eq!(to_attr("rest_port"), "RestPort");
        assert_eq!(to_attr("index_ram"), "");
        assert_eq!(to_attr(""), "");
    }

    #[test]
    fn test_get() {
        let conf = ServerConfig {
            name: "local".to_string(),
            count: 1,
            rest_port: "8091".to_string(),
            ram: "60%".to_string(),
            ..Default::default()
        };
        let group = ServerGroup::from_config(&conf, &BucketLookup::new());

        let port: Attribute = "rest_port".parse().unwrap();
        assert_eq!(port.get(&group), "8091");
        assert_eq!(Attribute::Ram.get(&group), "60%");
        assert_eq!(Attribute::Name.get(&group), "local");
        assert!("services".parse::<Attribute>().is_err());
    }
}
