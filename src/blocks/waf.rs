//! AWS WAF Classic operations.
//!
//! The eight condition-set types (byte match, geo match, IP, regex match,
//! regex pattern, size constraint, SQL injection, XSS) share one lifecycle:
//! create, get, list, update and delete. Each is described once as a
//! [`ConditionFamily`] and expanded into its five operations.

use super::operation::Operation;
use super::schema::{
    boolean, enumeration, integer, list, optional, required, string, structure, timestamp,
    Member, Shape,
};
use crate::service::Service;

fn op(name: &str, description: &str) -> Operation {
    Operation::new(Service::Waf, name, description)
}

// ============================================================================
// Shared shapes
// ============================================================================

fn change_token() -> Member {
    required("ChangeToken", string())
}

fn change_token_output() -> Shape {
    structure([optional("ChangeToken", string())])
}

fn paged(mut members: Vec<Member>) -> Shape {
    members.push(optional("NextMarker", string()));
    members.push(optional("Limit", integer()));
    structure(members)
}

fn update_action() -> Member {
    required("Action", enumeration(&["INSERT", "DELETE"]))
}

fn tag() -> Shape {
    structure([required("Key", string()), required("Value", string())])
}

fn tags() -> Member {
    optional("Tags", list(tag()))
}

fn field_to_match() -> Shape {
    structure([
        required(
            "Type",
            enumeration(&[
                "URI",
                "QUERY_STRING",
                "HEADER",
                "METHOD",
                "BODY",
                "SINGLE_QUERY_ARG",
                "ALL_QUERY_ARGS",
            ]),
        ),
        optional("Data", string()),
    ])
}

fn text_transformation() -> Shape {
    enumeration(&[
        "NONE",
        "COMPRESS_WHITE_SPACE",
        "HTML_ENTITY_DECODE",
        "LOWERCASE",
        "CMD_LINE",
        "URL_DECODE",
    ])
}

fn waf_action() -> Shape {
    structure([required(
        "Type",
        enumeration(&["BLOCK", "ALLOW", "COUNT"]),
    )])
}

fn predicate() -> Shape {
    structure([
        required("Negated", boolean()),
        required(
            "Type",
            enumeration(&[
                "IPMatch",
                "ByteMatch",
                "SqlInjectionMatch",
                "GeoMatch",
                "SizeConstraint",
                "XssMatch",
                "RegexMatch",
            ]),
        ),
        required("DataId", string()),
    ])
}

fn rule_updates() -> Member {
    required(
        "Updates",
        list(structure([update_action(), required("Predicate", predicate())])),
    )
}

fn activated_rule() -> Shape {
    structure([
        required("Priority", integer()),
        required("RuleId", string()),
        optional("Action", waf_action()),
        optional(
            "OverrideAction",
            structure([required("Type", enumeration(&["NONE", "COUNT"]))]),
        ),
        optional("Type", enumeration(&["REGULAR", "RATE_BASED", "GROUP"])),
        optional(
            "ExcludedRules",
            list(structure([required("RuleId", string())])),
        ),
    ])
}

fn activated_rule_updates() -> Member {
    required(
        "Updates",
        list(structure([
            update_action(),
            required("ActivatedRule", activated_rule()),
        ])),
    )
}

fn rule() -> Shape {
    structure([
        optional("RuleId", string()),
        optional("Name", string()),
        optional("MetricName", string()),
        optional("Predicates", list(predicate())),
    ])
}

fn rate_based_rule() -> Shape {
    structure([
        optional("RuleId", string()),
        optional("Name", string()),
        optional("MetricName", string()),
        optional("MatchPredicates", list(predicate())),
        optional("RateKey", enumeration(&["IP"])),
        optional("RateLimit", integer()),
    ])
}

fn rule_summaries() -> Shape {
    structure([
        optional("NextMarker", string()),
        optional(
            "Rules",
            list(structure([
                optional("RuleId", string()),
                optional("Name", string()),
            ])),
        ),
    ])
}

fn rule_group() -> Shape {
    structure([
        optional("RuleGroupId", string()),
        optional("Name", string()),
        optional("MetricName", string()),
    ])
}

fn web_acl() -> Shape {
    structure([
        optional("WebACLId", string()),
        optional("Name", string()),
        optional("MetricName", string()),
        optional("DefaultAction", waf_action()),
        optional("Rules", list(activated_rule())),
        optional("WebACLArn", string()),
    ])
}

fn logging_configuration() -> Shape {
    structure([
        required("ResourceArn", string()),
        required("LogDestinationConfigs", list(string())),
        optional("RedactedFields", list(field_to_match())),
    ])
}

// ============================================================================
// Condition-set families
// ============================================================================

/// One kind of WAF condition set.
struct ConditionFamily {
    /// Type name in operation names (`ByteMatchSet`)
    noun: &'static str,
    /// Plural used by the list operations (`ByteMatchSets`)
    plural: &'static str,
    /// Words used in descriptions (`byte match set`)
    label: &'static str,
    /// Member holding the set's contents (`ByteMatchTuples`)
    contents: &'static str,
    /// Member of an update entry holding one item (`ByteMatchTuple`)
    update_key: &'static str,
    /// Shape of one item
    item: fn() -> Shape,
}

impl ConditionFamily {
    fn id_field(&self) -> String {
        format!("{}Id", self.noun)
    }

    fn set(&self) -> Shape {
        structure([
            optional(self.id_field(), string()),
            optional("Name", string()),
            optional(self.contents, list((self.item)())),
        ])
    }

    fn operations(&self) -> Vec<Operation> {
        let id = self.id_field();
        let noun = self.noun;
        vec![
            op(
                &format!("Create{}", noun),
                &format!(
                    "Creates a new {}. Requires a change token from GetChangeToken.",
                    self.label
                ),
            )
            .with_input(structure([required("Name", string()), change_token()]))
            .with_output(structure([
                optional(noun, self.set()),
                optional("ChangeToken", string()),
            ])),
            op(
                &format!("Get{}", noun),
                &format!("Returns the {} specified by {}.", self.label, id),
            )
            .with_input(structure([required(id.as_str(), string())]))
            .with_output(structure([optional(noun, self.set())])),
            op(
                &format!("List{}", self.plural),
                &format!("Returns an array of {} summaries.", self.label),
            )
            .with_input(paged(Vec::new()))
            .with_output(structure([
                optional("NextMarker", string()),
                optional(
                    self.plural,
                    list(structure([
                        optional(id.as_str(), string()),
                        optional("Name", string()),
                    ])),
                ),
            ])),
            op(
                &format!("Update{}", noun),
                &format!("Inserts or deletes entries in the specified {}.", self.label),
            )
            .with_input(structure([
                required(id.as_str(), string()),
                change_token(),
                required(
                    "Updates",
                    list(structure([
                        update_action(),
                        required(self.update_key, (self.item)()),
                    ])),
                ),
            ]))
            .with_output(change_token_output()),
            op(
                &format!("Delete{}", noun),
                &format!(
                    "Permanently deletes the specified {}. The set must be empty and unused by any rule.",
                    self.label
                ),
            )
            .with_input(structure([required(id.as_str(), string()), change_token()]))
            .with_output(change_token_output()),
        ]
    }
}

fn byte_match_tuple() -> Shape {
    structure([
        required("FieldToMatch", field_to_match()),
        required("TargetString", string()),
        required("TextTransformation", text_transformation()),
        required(
            "PositionalConstraint",
            enumeration(&[
                "EXACTLY",
                "STARTS_WITH",
                "ENDS_WITH",
                "CONTAINS",
                "CONTAINS_WORD",
            ]),
        ),
    ])
}

fn geo_match_constraint() -> Shape {
    structure([
        required("Type", enumeration(&["Country"])),
        required("Value", string()),
    ])
}

fn ip_set_descriptor() -> Shape {
    structure([
        required("Type", enumeration(&["IPV4", "IPV6"])),
        required("Value", string()),
    ])
}

fn regex_match_tuple() -> Shape {
    structure([
        required("FieldToMatch", field_to_match()),
        required("TextTransformation", text_transformation()),
        required("RegexPatternSetId", string()),
    ])
}

fn regex_pattern_string() -> Shape {
    string()
}

fn size_constraint() -> Shape {
    structure([
        required("FieldToMatch", field_to_match()),
        required("TextTransformation", text_transformation()),
        required(
            "ComparisonOperator",
            enumeration(&["EQ", "NE", "LE", "LT", "GE", "GT"]),
        ),
        required("Size", integer()),
    ])
}

fn field_tuple() -> Shape {
    structure([
        required("FieldToMatch", field_to_match()),
        required("TextTransformation", text_transformation()),
    ])
}

const CONDITION_FAMILIES: [ConditionFamily; 8] = [
    ConditionFamily {
        noun: "ByteMatchSet",
        plural: "ByteMatchSets",
        label: "byte match set",
        contents: "ByteMatchTuples",
        update_key: "ByteMatchTuple",
        item: byte_match_tuple,
    },
    ConditionFamily {
        noun: "GeoMatchSet",
        plural: "GeoMatchSets",
        label: "geo match set",
        contents: "GeoMatchConstraints",
        update_key: "GeoMatchConstraint",
        item: geo_match_constraint,
    },
    ConditionFamily {
        noun: "IPSet",
        plural: "IPSets",
        label: "IP set",
        contents: "IPSetDescriptors",
        update_key: "IPSetDescriptor",
        item: ip_set_descriptor,
    },
    ConditionFamily {
        noun: "RegexMatchSet",
        plural: "RegexMatchSets",
        label: "regex match set",
        contents: "RegexMatchTuples",
        update_key: "RegexMatchTuple",
        item: regex_match_tuple,
    },
    ConditionFamily {
        noun: "RegexPatternSet",
        plural: "RegexPatternSets",
        label: "regex pattern set",
        contents: "RegexPatternStrings",
        update_key: "RegexPatternString",
        item: regex_pattern_string,
    },
    ConditionFamily {
        noun: "SizeConstraintSet",
        plural: "SizeConstraintSets",
        label: "size constraint set",
        contents: "SizeConstraints",
        update_key: "SizeConstraint",
        item: size_constraint,
    },
    ConditionFamily {
        noun: "SqlInjectionMatchSet",
        plural: "SqlInjectionMatchSets",
        label: "SQL injection match set",
        contents: "SqlInjectionMatchTuples",
        update_key: "SqlInjectionMatchTuple",
        item: field_tuple,
    },
    ConditionFamily {
        noun: "XssMatchSet",
        plural: "XssMatchSets",
        label: "cross-site scripting match set",
        contents: "XssMatchTuples",
        update_key: "XssMatchTuple",
        item: field_tuple,
    },
];

// ============================================================================
// Operations
// ============================================================================

/// Every WAF Classic operation in catalog order.
pub fn operations() -> Vec<Operation> {
    let mut operations = vec![
        op(
            "GetChangeToken",
            "Returns a change token to use in a create, update or delete request.",
        )
        .with_output(change_token_output()),
        op(
            "GetChangeTokenStatus",
            "Returns the status of a change token.",
        )
        .with_input(structure([change_token()]))
        .with_output(structure([optional(
            "ChangeTokenStatus",
            enumeration(&["PROVISIONED", "PENDING", "INSYNC"]),
        )])),
    ];
    for family in &CONDITION_FAMILIES {
        operations.extend(family.operations());
    }
    operations.extend(rule_operations());
    operations.extend(rate_based_rule_operations());
    operations.extend(rule_group_operations());
    operations.extend(web_acl_operations());
    operations.extend(logging_operations());
    operations.extend(permission_policy_operations());
    operations.extend(tag_operations());
    operations
}

fn rule_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateRule",
            "Creates a rule that identifies the web requests to allow, block or count.",
        )
        .with_input(structure([
            required("Name", string()),
            required("MetricName", string()),
            change_token(),
            tags(),
        ]))
        .with_output(structure([
            optional("Rule", rule()),
            optional("ChangeToken", string()),
        ])),
        op("GetRule", "Returns the rule specified by RuleId.")
            .with_input(structure([required("RuleId", string())]))
            .with_output(structure([optional("Rule", rule())])),
        op("ListRules", "Returns an array of rule summaries.")
            .with_input(paged(Vec::new()))
            .with_output(rule_summaries()),
        op(
            "UpdateRule",
            "Inserts or deletes predicates in a rule.",
        )
        .with_input(structure([
            required("RuleId", string()),
            change_token(),
            rule_updates(),
        ]))
        .with_output(change_token_output()),
        op(
            "DeleteRule",
            "Permanently deletes a rule. The rule must have no predicates and be unused by any web ACL.",
        )
        .with_input(structure([required("RuleId", string()), change_token()]))
        .with_output(change_token_output()),
    ]
}

fn rate_based_rule_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateRateBasedRule",
            "Creates a rate-based rule that counts requests per source IP over five minutes.",
        )
        .with_input(structure([
            required("Name", string()),
            required("MetricName", string()),
            required("RateKey", enumeration(&["IP"])),
            required("RateLimit", integer()),
            change_token(),
            tags(),
        ]))
        .with_output(structure([
            optional("Rule", rate_based_rule()),
            optional("ChangeToken", string()),
        ])),
        op(
            "GetRateBasedRule",
            "Returns the rate-based rule specified by RuleId.",
        )
        .with_input(structure([required("RuleId", string())]))
        .with_output(structure([optional("Rule", rate_based_rule())])),
        op(
            "GetRateBasedRuleManagedKeys",
            "Returns the IP addresses currently blocked by a rate-based rule.",
        )
        .with_input(structure([
            required("RuleId", string()),
            optional("NextMarker", string()),
        ]))
        .with_output(structure([
            optional("ManagedKeys", list(string())),
            optional("NextMarker", string()),
        ])),
        op(
            "ListRateBasedRules",
            "Returns an array of rate-based rule summaries.",
        )
        .with_input(paged(Vec::new()))
        .with_output(rule_summaries()),
        op(
            "UpdateRateBasedRule",
            "Inserts or deletes predicates in a rate-based rule, or changes its rate limit.",
        )
        .with_input(structure([
            required("RuleId", string()),
            change_token(),
            rule_updates(),
            required("RateLimit", integer()),
        ]))
        .with_output(change_token_output()),
        op(
            "DeleteRateBasedRule",
            "Permanently deletes a rate-based rule.",
        )
        .with_input(structure([required("RuleId", string()), change_token()]))
        .with_output(change_token_output()),
    ]
}

fn rule_group_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateRuleGroup",
            "Creates a rule group, a collection of predefined rules added to a web ACL as one unit.",
        )
        .with_input(structure([
            required("Name", string()),
            required("MetricName", string()),
            change_token(),
            tags(),
        ]))
        .with_output(structure([
            optional("RuleGroup", rule_group()),
            optional("ChangeToken", string()),
        ])),
        op(
            "GetRuleGroup",
            "Returns the rule group specified by RuleGroupId.",
        )
        .with_input(structure([required("RuleGroupId", string())]))
        .with_output(structure([optional("RuleGroup", rule_group())])),
        op(
            "ListRuleGroups",
            "Returns an array of rule group summaries.",
        )
        .with_input(paged(Vec::new()))
        .with_output(structure([
            optional("NextMarker", string()),
            optional(
                "RuleGroups",
                list(structure([
                    optional("RuleGroupId", string()),
                    optional("Name", string()),
                ])),
            ),
        ])),
        op(
            "ListActivatedRulesInRuleGroup",
            "Returns the activated rules in a rule group.",
        )
        .with_input(paged(vec![optional("RuleGroupId", string())]))
        .with_output(structure([
            optional("NextMarker", string()),
            optional("ActivatedRules", list(activated_rule())),
        ])),
        op(
            "ListSubscribedRuleGroups",
            "Returns the rule groups the account is subscribed to.",
        )
        .with_input(paged(Vec::new()))
        .with_output(structure([
            optional("NextMarker", string()),
            optional(
                "RuleGroups",
                list(structure([
                    optional("RuleGroupId", string()),
                    optional("Name", string()),
                    optional("MetricName", string()),
                ])),
            ),
        ])),
        op(
            "UpdateRuleGroup",
            "Inserts or deletes activated rules in a rule group.",
        )
        .with_input(structure([
            required("RuleGroupId", string()),
            activated_rule_updates(),
            change_token(),
        ]))
        .with_output(change_token_output()),
        op(
            "DeleteRuleGroup",
            "Permanently deletes a rule group. The group must be empty and unused by any web ACL.",
        )
        .with_input(structure([
            required("RuleGroupId", string()),
            change_token(),
        ]))
        .with_output(change_token_output()),
    ]
}

fn web_acl_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateWebACL",
            "Creates a web ACL, the set of rules and a default action applied to web requests.",
        )
        .with_input(structure([
            required("Name", string()),
            required("MetricName", string()),
            required("DefaultAction", waf_action()),
            change_token(),
            tags(),
        ]))
        .with_output(structure([
            optional("WebACL", web_acl()),
            optional("ChangeToken", string()),
        ])),
        op(
            "CreateWebACLMigrationStack",
            "Writes a CloudFormation template to S3 that recreates a WAF Classic web ACL in AWS WAF.",
        )
        .with_input(structure([
            required("WebACLId", string()),
            required("S3BucketName", string()),
            required("IgnoreUnsupportedType", boolean()),
        ]))
        .with_output(structure([optional("S3ObjectUrl", string())])),
        op("GetWebACL", "Returns the web ACL specified by WebACLId.")
            .with_input(structure([required("WebACLId", string())]))
            .with_output(structure([optional("WebACL", web_acl())])),
        op("ListWebACLs", "Returns an array of web ACL summaries.")
            .with_input(paged(Vec::new()))
            .with_output(structure([
                optional("NextMarker", string()),
                optional(
                    "WebACLs",
                    list(structure([
                        optional("WebACLId", string()),
                        optional("Name", string()),
                    ])),
                ),
            ])),
        op(
            "UpdateWebACL",
            "Inserts or deletes activated rules in a web ACL, or changes its default action.",
        )
        .with_input(structure([
            required("WebACLId", string()),
            change_token(),
            optional(
                "Updates",
                list(structure([
                    update_action(),
                    required("ActivatedRule", activated_rule()),
                ])),
            ),
            optional("DefaultAction", waf_action()),
        ]))
        .with_output(change_token_output()),
        op(
            "DeleteWebACL",
            "Permanently deletes a web ACL. The web ACL must not contain any rules.",
        )
        .with_input(structure([required("WebACLId", string()), change_token()]))
        .with_output(change_token_output()),
        op(
            "GetSampledRequests",
            "Returns a sample of the web requests a rule or rule group matched in a time window of up to three hours.",
        )
        .with_input(structure([
            required("WebAclId", string()),
            required("RuleId", string()),
            required(
                "TimeWindow",
                structure([
                    required("StartTime", timestamp()),
                    required("EndTime", timestamp()),
                ]),
            ),
            required("MaxItems", integer()),
        ]))
        .with_output(structure([
            optional(
                "SampledRequests",
                list(structure([
                    optional(
                        "Request",
                        structure([
                            optional("ClientIP", string()),
                            optional("Country", string()),
                            optional("URI", string()),
                            optional("Method", string()),
                            optional("HTTPVersion", string()),
                            optional(
                                "Headers",
                                list(structure([
                                    optional("Name", string()),
                                    optional("Value", string()),
                                ])),
                            ),
                        ]),
                    ),
                    optional("Weight", integer()),
                    optional("Timestamp", timestamp()),
                    optional("Action", string()),
                    optional("RuleWithinRuleGroup", string()),
                ])),
            ),
            optional("PopulationSize", integer()),
            optional(
                "TimeWindow",
                structure([
                    optional("StartTime", timestamp()),
                    optional("EndTime", timestamp()),
                ]),
            ),
        ])),
    ]
}

fn logging_operations() -> Vec<Operation> {
    vec![
        op(
            "PutLoggingConfiguration",
            "Associates a Kinesis Data Firehose with a web ACL to log its traffic.",
        )
        .with_input(structure([required(
            "LoggingConfiguration",
            logging_configuration(),
        )]))
        .with_output(structure([optional(
            "LoggingConfiguration",
            logging_configuration(),
        )])),
        op(
            "GetLoggingConfiguration",
            "Returns the logging configuration of a web ACL.",
        )
        .with_input(structure([required("ResourceArn", string())]))
        .with_output(structure([optional(
            "LoggingConfiguration",
            logging_configuration(),
        )])),
        op(
            "ListLoggingConfigurations",
            "Returns an array of logging configurations.",
        )
        .with_input(paged(Vec::new()))
        .with_output(structure([
            optional("LoggingConfigurations", list(logging_configuration())),
            optional("NextMarker", string()),
        ])),
        op(
            "DeleteLoggingConfiguration",
            "Removes the logging configuration from a web ACL.",
        )
        .with_input(structure([required("ResourceArn", string())])),
    ]
}

fn permission_policy_operations() -> Vec<Operation> {
    vec![
        op(
            "PutPermissionPolicy",
            "Attaches an IAM policy to a rule group to share it with other accounts.",
        )
        .with_input(structure([
            required("ResourceArn", string()),
            required("Policy", string()),
        ])),
        op(
            "GetPermissionPolicy",
            "Returns the IAM policy attached to a rule group.",
        )
        .with_input(structure([required("ResourceArn", string())]))
        .with_output(structure([optional("Policy", string())])),
        op(
            "DeletePermissionPolicy",
            "Removes the IAM policy attached to a rule group.",
        )
        .with_input(structure([required("ResourceArn", string())])),
    ]
}

fn tag_operations() -> Vec<Operation> {
    vec![
        op("TagResource", "Adds tags to a WAF Classic resource.").with_input(structure([
            required("ResourceARN", string()),
            required("Tags", list(tag())),
        ])),
        op("UntagResource", "Removes tags from a WAF Classic resource.").with_input(structure([
            required("ResourceARN", string()),
            required("TagKeys", list(string())),
        ])),
        op(
            "ListTagsForResource",
            "Lists the tags on a WAF Classic resource.",
        )
        .with_input(paged(vec![required("ResourceARN", string())]))
        .with_output(structure([
            optional("NextMarker", string()),
            optional(
                "TagInfoForResource",
                structure([
                    optional("ResourceARN", string()),
                    optional("TagList", list(tag())),
                ]),
            ),
        ])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(name: &str) -> Operation {
        operations()
            .into_iter()
            .find(|o| o.name == name)
            .unwrap_or_else(|| panic!("{} missing", name))
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let operations = operations();
        let names: HashSet<_> = operations.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), operations.len());
        assert_eq!(operations.len(), 77);
    }

    #[test]
    fn test_every_family_has_full_lifecycle() {
        let names: HashSet<String> = operations().into_iter().map(|o| o.name).collect();
        for family in &CONDITION_FAMILIES {
            for name in [
                format!("Create{}", family.noun),
                format!("Get{}", family.noun),
                format!("List{}", family.plural),
                format!("Update{}", family.noun),
                format!("Delete{}", family.noun),
            ] {
                assert!(names.contains(&name), "{} missing", name);
            }
        }
    }

    #[test]
    fn test_family_shapes() {
        let update = find("UpdateIPSet");
        assert_eq!(
            update.input.required_members(),
            vec!["IPSetId", "ChangeToken", "Updates"]
        );
        assert_eq!(update.title, "Update IP Set");
        assert_eq!(update.block_id(), "waf.updateIPSet");

        let get = find("GetXssMatchSet");
        let set = &get.output.member("XssMatchSet").unwrap().shape;
        assert!(set.member("XssMatchSetId").is_some());
        assert!(set.member("XssMatchTuples").is_some());
    }

    #[test]
    fn test_change_token_operations() {
        let token = find("GetChangeToken");
        assert!(token.input.members().is_empty());
        assert!(token.output.member("ChangeToken").is_some());
        assert_eq!(
            find("CreateWebACLMigrationStack").title,
            "Create Web ACL Migration Stack"
        );
    }
}
