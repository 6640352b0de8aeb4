//! Amazon EKS operations.
//!
//! EKS speaks REST-JSON, so every operation carries its HTTP method and URI
//! template, and members bound to the URI or query string say so.

use super::operation::Operation;
use super::schema::{
    any, boolean, enumeration, integer, list, optional, required, string, string_list,
    string_map, structure, timestamp, Member, Shape,
};
use crate::service::Service;

fn op(name: &str, description: &str) -> Operation {
    Operation::new(Service::Eks, name, description)
}

// ============================================================================
// Shared members
// ============================================================================

fn cluster_name() -> Member {
    required("clusterName", string()).path()
}

fn name_label() -> Member {
    required("name", string()).path()
}

fn nodegroup_name() -> Member {
    required("nodegroupName", string()).path()
}

fn client_request_token() -> Member {
    optional("clientRequestToken", string())
}

fn tags() -> Member {
    optional("tags", string_map())
}

fn paginated(mut members: Vec<Member>) -> Vec<Member> {
    members.push(optional("maxResults", integer()).query("maxResults"));
    members.push(optional("nextToken", string()).query("nextToken"));
    members
}

fn single(name: &str, shape: Shape) -> Shape {
    structure([optional(name, shape)])
}

fn page_of(name: &str, item: Shape) -> Shape {
    structure([optional(name, list(item)), optional("nextToken", string())])
}

// ============================================================================
// Shared shapes
// ============================================================================

fn error_detail() -> Shape {
    structure([
        optional("errorCode", string()),
        optional("errorMessage", string()),
        optional("resourceIds", string_list()),
    ])
}

fn vpc_config_request() -> Shape {
    structure([
        optional("subnetIds", string_list()),
        optional("securityGroupIds", string_list()),
        optional("endpointPublicAccess", boolean()),
        optional("endpointPrivateAccess", boolean()),
        optional("publicAccessCidrs", string_list()),
    ])
}

fn logging() -> Shape {
    structure([optional(
        "clusterLogging",
        list(structure([
            optional(
                "types",
                list(enumeration(&[
                    "api",
                    "audit",
                    "authenticator",
                    "controllerManager",
                    "scheduler",
                ])),
            ),
            optional("enabled", boolean()),
        ])),
    )])
}

fn encryption_config() -> Shape {
    list(structure([
        optional("resources", string_list()),
        optional("provider", structure([optional("keyArn", string())])),
    ]))
}

fn kubernetes_network_config() -> Shape {
    structure([
        optional("serviceIpv4Cidr", string()),
        optional("ipFamily", enumeration(&["ipv4", "ipv6"])),
        optional(
            "elasticLoadBalancing",
            structure([optional("enabled", boolean())]),
        ),
    ])
}

fn access_config() -> Shape {
    structure([
        optional("bootstrapClusterCreatorAdminPermissions", boolean()),
        optional(
            "authenticationMode",
            enumeration(&["API", "API_AND_CONFIG_MAP", "CONFIG_MAP"]),
        ),
    ])
}

fn upgrade_policy() -> Shape {
    structure([optional(
        "supportType",
        enumeration(&["STANDARD", "EXTENDED"]),
    )])
}

fn enabled_flag() -> Shape {
    structure([optional("enabled", boolean())])
}

fn compute_config() -> Shape {
    structure([
        optional("enabled", boolean()),
        optional("nodePools", string_list()),
        optional("nodeRoleArn", string()),
    ])
}

fn storage_config() -> Shape {
    structure([optional("blockStorage", enabled_flag())])
}

fn remote_network_config() -> Shape {
    structure([
        optional(
            "remoteNodeNetworks",
            list(structure([optional("cidrs", string_list())])),
        ),
        optional(
            "remotePodNetworks",
            list(structure([optional("cidrs", string_list())])),
        ),
    ])
}

fn outpost_config() -> Shape {
    structure([
        required("outpostArns", string_list()),
        required("controlPlaneInstanceType", string()),
        optional(
            "controlPlanePlacement",
            structure([optional("groupName", string())]),
        ),
    ])
}

fn cluster() -> Shape {
    structure([
        optional("name", string()),
        optional("arn", string()),
        optional("createdAt", timestamp()),
        optional("version", string()),
        optional("endpoint", string()),
        optional("roleArn", string()),
        optional(
            "resourcesVpcConfig",
            structure([
                optional("subnetIds", string_list()),
                optional("securityGroupIds", string_list()),
                optional("clusterSecurityGroupId", string()),
                optional("vpcId", string()),
                optional("endpointPublicAccess", boolean()),
                optional("endpointPrivateAccess", boolean()),
                optional("publicAccessCidrs", string_list()),
            ]),
        ),
        optional("kubernetesNetworkConfig", kubernetes_network_config()),
        optional("logging", logging()),
        optional(
            "identity",
            structure([optional(
                "oidc",
                structure([optional("issuer", string())]),
            )]),
        ),
        optional(
            "status",
            enumeration(&["CREATING", "ACTIVE", "DELETING", "FAILED", "UPDATING", "PENDING"]),
        ),
        optional(
            "certificateAuthority",
            structure([optional("data", string())]),
        ),
        optional("clientRequestToken", string()),
        optional("platformVersion", string()),
        optional("tags", string_map()),
        optional("encryptionConfig", encryption_config()),
        optional(
            "connectorConfig",
            structure([
                optional("activationId", string()),
                optional("activationCode", string()),
                optional("activationExpiry", timestamp()),
                optional("provider", string()),
                optional("roleArn", string()),
            ]),
        ),
        optional("id", string()),
        optional(
            "health",
            structure([optional("issues", list(error_detail()))]),
        ),
        optional("outpostConfig", outpost_config()),
        optional("accessConfig", access_config()),
        optional("upgradePolicy", upgrade_policy()),
        optional("zonalShiftConfig", enabled_flag()),
        optional("remoteNetworkConfig", remote_network_config()),
        optional("computeConfig", compute_config()),
        optional("storageConfig", storage_config()),
    ])
}

fn update() -> Shape {
    structure([
        optional("id", string()),
        optional(
            "status",
            enumeration(&["InProgress", "Failed", "Cancelled", "Successful"]),
        ),
        optional("type", string()),
        optional(
            "params",
            list(structure([
                optional("type", string()),
                optional("value", string()),
            ])),
        ),
        optional("createdAt", timestamp()),
        optional("errors", list(error_detail())),
    ])
}

fn scaling_config() -> Shape {
    structure([
        optional("minSize", integer()),
        optional("maxSize", integer()),
        optional("desiredSize", integer()),
    ])
}

fn taint() -> Shape {
    structure([
        optional("key", string()),
        optional("value", string()),
        optional(
            "effect",
            enumeration(&["NO_SCHEDULE", "NO_EXECUTE", "PREFER_NO_SCHEDULE"]),
        ),
    ])
}

fn launch_template() -> Shape {
    structure([
        optional("name", string()),
        optional("version", string()),
        optional("id", string()),
    ])
}

fn nodegroup_update_config() -> Shape {
    structure([
        optional("maxUnavailable", integer()),
        optional("maxUnavailablePercentage", integer()),
    ])
}

fn remote_access() -> Shape {
    structure([
        optional("ec2SshKey", string()),
        optional("sourceSecurityGroups", string_list()),
    ])
}

fn nodegroup() -> Shape {
    structure([
        optional("nodegroupName", string()),
        optional("nodegroupArn", string()),
        optional("clusterName", string()),
        optional("version", string()),
        optional("releaseVersion", string()),
        optional("createdAt", timestamp()),
        optional("modifiedAt", timestamp()),
        optional("status", string()),
        optional("capacityType", enumeration(&["ON_DEMAND", "SPOT", "CAPACITY_BLOCK"])),
        optional("scalingConfig", scaling_config()),
        optional("instanceTypes", string_list()),
        optional("subnets", string_list()),
        optional("remoteAccess", remote_access()),
        optional("amiType", string()),
        optional("nodeRole", string()),
        optional("labels", string_map()),
        optional("taints", list(taint())),
        optional(
            "resources",
            structure([
                optional(
                    "autoScalingGroups",
                    list(structure([optional("name", string())])),
                ),
                optional("remoteAccessSecurityGroup", string()),
            ]),
        ),
        optional("diskSize", integer()),
        optional(
            "health",
            structure([optional("issues", list(error_detail()))]),
        ),
        optional("updateConfig", nodegroup_update_config()),
        optional("nodeRepairConfig", enabled_flag()),
        optional("launchTemplate", launch_template()),
        optional("tags", string_map()),
    ])
}

fn fargate_selector() -> Shape {
    structure([
        optional("namespace", string()),
        optional("labels", string_map()),
    ])
}

fn fargate_profile() -> Shape {
    structure([
        optional("fargateProfileName", string()),
        optional("fargateProfileArn", string()),
        optional("clusterName", string()),
        optional("createdAt", timestamp()),
        optional("podExecutionRoleArn", string()),
        optional("subnets", string_list()),
        optional("selectors", list(fargate_selector())),
        optional("status", string()),
        optional("tags", string_map()),
        optional(
            "health",
            structure([optional("issues", list(error_detail()))]),
        ),
    ])
}

fn pod_identity_mapping() -> Shape {
    structure([
        required("serviceAccount", string()),
        required("roleArn", string()),
    ])
}

fn resolve_conflicts() -> Shape {
    enumeration(&["OVERWRITE", "NONE", "PRESERVE"])
}

fn addon() -> Shape {
    structure([
        optional("addonName", string()),
        optional("clusterName", string()),
        optional("status", string()),
        optional("addonVersion", string()),
        optional(
            "health",
            structure([optional("issues", list(error_detail()))]),
        ),
        optional("addonArn", string()),
        optional("createdAt", timestamp()),
        optional("modifiedAt", timestamp()),
        optional("serviceAccountRoleArn", string()),
        optional("tags", string_map()),
        optional("publisher", string()),
        optional("owner", string()),
        optional(
            "marketplaceInformation",
            structure([
                optional("productId", string()),
                optional("productUrl", string()),
            ]),
        ),
        optional("configurationValues", string()),
        optional("podIdentityAssociations", string_list()),
    ])
}

fn access_entry() -> Shape {
    structure([
        optional("clusterName", string()),
        optional("principalArn", string()),
        optional("kubernetesGroups", string_list()),
        optional("accessEntryArn", string()),
        optional("createdAt", timestamp()),
        optional("modifiedAt", timestamp()),
        optional("tags", string_map()),
        optional("username", string()),
        optional("type", string()),
    ])
}

fn access_scope() -> Shape {
    structure([
        optional("type", enumeration(&["cluster", "namespace"])),
        optional("namespaces", string_list()),
    ])
}

fn associated_access_policy() -> Shape {
    structure([
        optional("policyArn", string()),
        optional("accessScope", access_scope()),
        optional("associatedAt", timestamp()),
        optional("modifiedAt", timestamp()),
    ])
}

fn pod_identity_association() -> Shape {
    structure([
        optional("clusterName", string()),
        optional("namespace", string()),
        optional("serviceAccount", string()),
        optional("roleArn", string()),
        optional("associationArn", string()),
        optional("associationId", string()),
        optional("tags", string_map()),
        optional("createdAt", timestamp()),
        optional("modifiedAt", timestamp()),
        optional("ownerArn", string()),
        optional("disableSessionTags", boolean()),
        optional("targetRoleArn", string()),
        optional("externalId", string()),
    ])
}

fn identity_provider_config() -> Shape {
    structure([required("type", string()), required("name", string())])
}

fn oidc_request() -> Shape {
    structure([
        required("identityProviderConfigName", string()),
        required("issuerUrl", string()),
        required("clientId", string()),
        optional("usernameClaim", string()),
        optional("usernamePrefix", string()),
        optional("groupsClaim", string()),
        optional("groupsPrefix", string()),
        optional("requiredClaims", string_map()),
    ])
}

fn insight() -> Shape {
    structure([
        optional("id", string()),
        optional("name", string()),
        optional("category", string()),
        optional("kubernetesVersion", string()),
        optional("lastRefreshTime", timestamp()),
        optional("lastTransitionTime", timestamp()),
        optional("description", string()),
        optional(
            "insightStatus",
            structure([
                optional("status", enumeration(&["PASSING", "WARNING", "ERROR", "UNKNOWN"])),
                optional("reason", string()),
            ]),
        ),
        optional("recommendation", string()),
        optional("additionalInfo", string_map()),
        optional("resources", list(any())),
        optional("categorySpecificSummary", any()),
    ])
}

fn subscription_term() -> Shape {
    structure([
        optional("duration", integer()),
        optional("unit", enumeration(&["MONTHS"])),
    ])
}

fn subscription() -> Shape {
    structure([
        optional("id", string()),
        optional("arn", string()),
        optional("createdAt", timestamp()),
        optional("effectiveDate", timestamp()),
        optional("expirationDate", timestamp()),
        optional("licenseQuantity", integer()),
        optional("licenseType", string()),
        optional("term", subscription_term()),
        optional("status", string()),
        optional("autoRenew", boolean()),
        optional("licenseArns", string_list()),
        optional("tags", string_map()),
    ])
}

// ============================================================================
// Operations
// ============================================================================

/// Every EKS operation in catalog order.
pub fn operations() -> Vec<Operation> {
    let mut operations = Vec::new();
    operations.extend(cluster_operations());
    operations.extend(nodegroup_operations());
    operations.extend(fargate_operations());
    operations.extend(addon_operations());
    operations.extend(access_operations());
    operations.extend(pod_identity_operations());
    operations.extend(insight_operations());
    operations.extend(subscription_operations());
    operations.extend(tag_operations());
    operations
}

fn cluster_operations() -> Vec<Operation> {
    vec![
        op("CreateCluster", "Creates an Amazon EKS control plane.")
            .with_http("POST", "/clusters")
            .with_input(structure([
                required("name", string()),
                optional("version", string()),
                required("roleArn", string()),
                required("resourcesVpcConfig", vpc_config_request()),
                optional("kubernetesNetworkConfig", kubernetes_network_config()),
                optional("logging", logging()),
                client_request_token(),
                tags(),
                optional("encryptionConfig", encryption_config()),
                optional("outpostConfig", outpost_config()),
                optional("accessConfig", access_config()),
                optional("bootstrapSelfManagedAddons", boolean()),
                optional("upgradePolicy", upgrade_policy()),
                optional("zonalShiftConfig", enabled_flag()),
                optional("remoteNetworkConfig", remote_network_config()),
                optional("computeConfig", compute_config()),
                optional("storageConfig", storage_config()),
            ]))
            .with_output(single("cluster", cluster())),
        op("DeleteCluster", "Deletes an Amazon EKS cluster control plane.")
            .with_http("DELETE", "/clusters/{name}")
            .with_input(structure([name_label()]))
            .with_output(single("cluster", cluster())),
        op("DescribeCluster", "Describes an Amazon EKS cluster.")
            .with_http("GET", "/clusters/{name}")
            .with_input(structure([name_label()]))
            .with_output(single("cluster", cluster())),
        op(
            "ListClusters",
            "Lists the Amazon EKS clusters in your Amazon Web Services account in the specified Region.",
        )
        .with_http("GET", "/clusters")
        .with_input(structure(paginated(vec![
            optional("include", string_list()).query("include"),
        ])))
        .with_output(page_of("clusters", string())),
        op(
            "UpdateClusterConfig",
            "Updates an Amazon EKS cluster configuration. Your cluster continues to function during the update.",
        )
        .with_http("POST", "/clusters/{name}/update-config")
        .with_input(structure([
            name_label(),
            optional("resourcesVpcConfig", vpc_config_request()),
            optional("logging", logging()),
            client_request_token(),
            optional("accessConfig", access_config()),
            optional("upgradePolicy", upgrade_policy()),
            optional("zonalShiftConfig", enabled_flag()),
            optional("computeConfig", compute_config()),
            optional("kubernetesNetworkConfig", kubernetes_network_config()),
            optional("storageConfig", storage_config()),
            optional("remoteNetworkConfig", remote_network_config()),
        ]))
        .with_output(single("update", update())),
        op(
            "UpdateClusterVersion",
            "Updates an Amazon EKS cluster to the specified Kubernetes version.",
        )
        .with_http("POST", "/clusters/{name}/updates")
        .with_input(structure([
            name_label(),
            required("version", string()),
            client_request_token(),
            optional("force", boolean()),
        ]))
        .with_output(single("update", update())),
        op(
            "DescribeClusterVersions",
            "Lists available Kubernetes versions for Amazon EKS clusters.",
        )
        .with_http("GET", "/cluster-versions")
        .with_input(structure(paginated(vec![
            optional("clusterType", string()).query("clusterType"),
            optional("defaultOnly", boolean()).query("defaultOnly"),
            optional("includeAll", boolean()).query("includeAll"),
            optional("clusterVersions", string_list()).query("clusterVersions"),
            optional(
                "versionStatus",
                enumeration(&["UNSUPPORTED", "STANDARD_SUPPORT", "EXTENDED_SUPPORT"]),
            )
            .query("versionStatus"),
        ])))
        .with_output(page_of("clusterVersions", any())),
        op(
            "RegisterCluster",
            "Connects a Kubernetes cluster to the Amazon EKS control plane.",
        )
        .with_http("POST", "/cluster-registrations")
        .with_input(structure([
            required("name", string()),
            required(
                "connectorConfig",
                structure([
                    required("roleArn", string()),
                    required(
                        "provider",
                        enumeration(&[
                            "EKS_ANYWHERE",
                            "ANTHOS",
                            "GKE",
                            "AKS",
                            "OPENSHIFT",
                            "TANZU",
                            "RANCHER",
                            "EC2",
                            "OTHER",
                        ]),
                    ),
                ]),
            ),
            client_request_token(),
            tags(),
        ]))
        .with_output(single("cluster", cluster())),
        op(
            "DeregisterCluster",
            "Deregisters a connected cluster to remove it from the Amazon EKS control plane.",
        )
        .with_http("DELETE", "/cluster-registrations/{name}")
        .with_input(structure([name_label()]))
        .with_output(single("cluster", cluster())),
        op(
            "AssociateEncryptionConfig",
            "Associates an encryption configuration to an existing cluster.",
        )
        .with_http("POST", "/clusters/{clusterName}/encryption-config/associate")
        .with_input(structure([
            cluster_name(),
            required("encryptionConfig", encryption_config()),
            client_request_token(),
        ]))
        .with_output(single("update", update())),
        op(
            "AssociateIdentityProviderConfig",
            "Associates an identity provider configuration to a cluster.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/identity-provider-configs/associate",
        )
        .with_input(structure([
            cluster_name(),
            required("oidc", oidc_request()),
            tags(),
            client_request_token(),
        ]))
        .with_output(structure([
            optional("update", update()),
            optional("tags", string_map()),
        ])),
        op(
            "DisassociateIdentityProviderConfig",
            "Disassociates an identity provider configuration from a cluster.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/identity-provider-configs/disassociate",
        )
        .with_input(structure([
            cluster_name(),
            required("identityProviderConfig", identity_provider_config()),
            client_request_token(),
        ]))
        .with_output(single("update", update())),
        op(
            "DescribeIdentityProviderConfig",
            "Describes an identity provider configuration.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/identity-provider-configs/describe",
        )
        .with_input(structure([
            cluster_name(),
            required("identityProviderConfig", identity_provider_config()),
        ]))
        .with_output(single("identityProviderConfig", any())),
        op(
            "ListIdentityProviderConfigs",
            "Lists the identity provider configurations for your cluster.",
        )
        .with_http("GET", "/clusters/{clusterName}/identity-provider-configs")
        .with_input(structure(paginated(vec![cluster_name()])))
        .with_output(page_of("identityProviderConfigs", identity_provider_config())),
        op(
            "DescribeUpdate",
            "Describes an update to an Amazon EKS resource.",
        )
        .with_http("GET", "/clusters/{name}/updates/{updateId}")
        .with_input(structure([
            name_label(),
            required("updateId", string()).path(),
            optional("nodegroupName", string()).query("nodegroupName"),
            optional("addonName", string()).query("addonName"),
        ]))
        .with_output(single("update", update())),
        op(
            "ListUpdates",
            "Lists the updates associated with an Amazon EKS resource in your Amazon Web Services account, in the specified Amazon Web Services Region.",
        )
        .with_http("GET", "/clusters/{name}/updates")
        .with_input(structure(paginated(vec![
            name_label(),
            optional("nodegroupName", string()).query("nodegroupName"),
            optional("addonName", string()).query("addonName"),
        ])))
        .with_output(page_of("updateIds", string())),
    ]
}

fn nodegroup_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateNodegroup",
            "Creates a managed node group for an Amazon EKS cluster.",
        )
        .with_http("POST", "/clusters/{clusterName}/node-groups")
        .with_input(structure([
            cluster_name(),
            required("nodegroupName", string()),
            optional("scalingConfig", scaling_config()),
            optional("diskSize", integer()),
            required("subnets", string_list()),
            optional("instanceTypes", string_list()),
            optional("amiType", string()),
            optional("remoteAccess", remote_access()),
            required("nodeRole", string()),
            optional("labels", string_map()),
            optional("taints", list(taint())),
            tags(),
            client_request_token(),
            optional("launchTemplate", launch_template()),
            optional("updateConfig", nodegroup_update_config()),
            optional("nodeRepairConfig", enabled_flag()),
            optional(
                "capacityType",
                enumeration(&["ON_DEMAND", "SPOT", "CAPACITY_BLOCK"]),
            ),
            optional("version", string()),
            optional("releaseVersion", string()),
        ]))
        .with_output(single("nodegroup", nodegroup())),
        op(
            "DeleteNodegroup",
            "Deletes a managed node group.",
        )
        .with_http("DELETE", "/clusters/{clusterName}/node-groups/{nodegroupName}")
        .with_input(structure([cluster_name(), nodegroup_name()]))
        .with_output(single("nodegroup", nodegroup())),
        op(
            "DescribeNodegroup",
            "Describes a managed node group.",
        )
        .with_http("GET", "/clusters/{clusterName}/node-groups/{nodegroupName}")
        .with_input(structure([cluster_name(), nodegroup_name()]))
        .with_output(single("nodegroup", nodegroup())),
        op(
            "ListNodegroups",
            "Lists the managed node groups associated with the specified cluster.",
        )
        .with_http("GET", "/clusters/{clusterName}/node-groups")
        .with_input(structure(paginated(vec![cluster_name()])))
        .with_output(page_of("nodegroups", string())),
        op(
            "UpdateNodegroupConfig",
            "Updates an Amazon EKS managed node group configuration.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/node-groups/{nodegroupName}/update-config",
        )
        .with_input(structure([
            cluster_name(),
            nodegroup_name(),
            optional(
                "labels",
                structure([
                    optional("addOrUpdateLabels", string_map()),
                    optional("removeLabels", string_list()),
                ]),
            ),
            optional(
                "taints",
                structure([
                    optional("addOrUpdateTaints", list(taint())),
                    optional("removeTaints", list(taint())),
                ]),
            ),
            optional("scalingConfig", scaling_config()),
            optional("updateConfig", nodegroup_update_config()),
            optional("nodeRepairConfig", enabled_flag()),
            client_request_token(),
        ]))
        .with_output(single("update", update())),
        op(
            "UpdateNodegroupVersion",
            "Updates the Kubernetes version or AMI version of an Amazon EKS managed node group.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/node-groups/{nodegroupName}/update-version",
        )
        .with_input(structure([
            cluster_name(),
            nodegroup_name(),
            optional("version", string()),
            optional("releaseVersion", string()),
            optional("launchTemplate", launch_template()),
            optional("force", boolean()),
            client_request_token(),
        ]))
        .with_output(single("update", update())),
    ]
}

fn fargate_operations() -> Vec<Operation> {
    let profile_name = || required("fargateProfileName", string()).path();
    vec![
        op(
            "CreateFargateProfile",
            "Creates an Fargate profile for your Amazon EKS cluster.",
        )
        .with_http("POST", "/clusters/{clusterName}/fargate-profiles")
        .with_input(structure([
            cluster_name(),
            required("fargateProfileName", string()),
            required("podExecutionRoleArn", string()),
            optional("subnets", string_list()),
            optional("selectors", list(fargate_selector())),
            client_request_token(),
            tags(),
        ]))
        .with_output(single("fargateProfile", fargate_profile())),
        op("DeleteFargateProfile", "Deletes an Fargate profile.")
            .with_http(
                "DELETE",
                "/clusters/{clusterName}/fargate-profiles/{fargateProfileName}",
            )
            .with_input(structure([cluster_name(), profile_name()]))
            .with_output(single("fargateProfile", fargate_profile())),
        op("DescribeFargateProfile", "Describes an Fargate profile.")
            .with_http(
                "GET",
                "/clusters/{clusterName}/fargate-profiles/{fargateProfileName}",
            )
            .with_input(structure([cluster_name(), profile_name()]))
            .with_output(single("fargateProfile", fargate_profile())),
        op(
            "ListFargateProfiles",
            "Lists the Fargate profiles associated with the specified cluster.",
        )
        .with_http("GET", "/clusters/{clusterName}/fargate-profiles")
        .with_input(structure(paginated(vec![cluster_name()])))
        .with_output(page_of("fargateProfileNames", string())),
    ]
}

fn addon_operations() -> Vec<Operation> {
    let addon_name = || required("addonName", string()).path();
    vec![
        op("CreateAddon", "Creates an Amazon EKS add-on.")
            .with_http("POST", "/clusters/{clusterName}/addons")
            .with_input(structure([
                cluster_name(),
                required("addonName", string()),
                optional("addonVersion", string()),
                optional("serviceAccountRoleArn", string()),
                optional("resolveConflicts", resolve_conflicts()),
                client_request_token(),
                tags(),
                optional("configurationValues", string()),
                optional("podIdentityAssociations", list(pod_identity_mapping())),
            ]))
            .with_output(single("addon", addon())),
        op("DeleteAddon", "Deletes an Amazon EKS add-on.")
            .with_http("DELETE", "/clusters/{clusterName}/addons/{addonName}")
            .with_input(structure([
                cluster_name(),
                addon_name(),
                optional("preserve", boolean()).query("preserve"),
            ]))
            .with_output(single("addon", addon())),
        op("DescribeAddon", "Describes an Amazon EKS add-on.")
            .with_http("GET", "/clusters/{clusterName}/addons/{addonName}")
            .with_input(structure([cluster_name(), addon_name()]))
            .with_output(single("addon", addon())),
        op("ListAddons", "Lists the installed add-ons.")
            .with_http("GET", "/clusters/{clusterName}/addons")
            .with_input(structure(paginated(vec![cluster_name()])))
            .with_output(page_of("addons", string())),
        op("UpdateAddon", "Updates an Amazon EKS add-on.")
            .with_http("POST", "/clusters/{clusterName}/addons/{addonName}/update")
            .with_input(structure([
                cluster_name(),
                addon_name(),
                optional("addonVersion", string()),
                optional("serviceAccountRoleArn", string()),
                optional("resolveConflicts", resolve_conflicts()),
                client_request_token(),
                optional("configurationValues", string()),
                optional("podIdentityAssociations", list(pod_identity_mapping())),
            ]))
            .with_output(single("update", update())),
        op(
            "DescribeAddonVersions",
            "Describes the versions for an add-on.",
        )
        .with_http("GET", "/addons/supported-versions")
        .with_input(structure(paginated(vec![
            optional("kubernetesVersion", string()).query("kubernetesVersion"),
            optional("addonName", string()).query("addonName"),
            optional("types", string_list()).query("types"),
            optional("publishers", string_list()).query("publishers"),
            optional("owners", string_list()).query("owners"),
        ])))
        .with_output(page_of("addons", any())),
        op(
            "DescribeAddonConfiguration",
            "Returns configuration options.",
        )
        .with_http("GET", "/addons/configuration-schemas")
        .with_input(structure([
            required("addonName", string()).query("addonName"),
            required("addonVersion", string()).query("addonVersion"),
        ]))
        .with_output(structure([
            optional("addonName", string()),
            optional("addonVersion", string()),
            optional("configurationSchema", string()),
            optional(
                "podIdentityConfiguration",
                list(structure([
                    optional("serviceAccount", string()),
                    optional("recommendedManagedPolicies", string_list()),
                ])),
            ),
        ])),
    ]
}

fn access_operations() -> Vec<Operation> {
    let principal_arn = || required("principalArn", string()).path();
    vec![
        op("CreateAccessEntry", "Creates an access entry.")
            .with_http("POST", "/clusters/{clusterName}/access-entries")
            .with_input(structure([
                cluster_name(),
                required("principalArn", string()),
                optional("kubernetesGroups", string_list()),
                tags(),
                client_request_token(),
                optional("username", string()),
                optional("type", string()),
            ]))
            .with_output(single("accessEntry", access_entry())),
        op("DeleteAccessEntry", "Deletes an access entry.")
            .with_http(
                "DELETE",
                "/clusters/{clusterName}/access-entries/{principalArn}",
            )
            .with_input(structure([cluster_name(), principal_arn()])),
        op("DescribeAccessEntry", "Describes an access entry.")
            .with_http("GET", "/clusters/{clusterName}/access-entries/{principalArn}")
            .with_input(structure([cluster_name(), principal_arn()]))
            .with_output(single("accessEntry", access_entry())),
        op("ListAccessEntries", "Lists the access entries for your cluster.")
            .with_http("GET", "/clusters/{clusterName}/access-entries")
            .with_input(structure(paginated(vec![
                cluster_name(),
                optional("associatedPolicyArn", string()).query("associatedPolicyArn"),
            ])))
            .with_output(page_of("accessEntries", string())),
        op("UpdateAccessEntry", "Updates an access entry.")
            .with_http(
                "POST",
                "/clusters/{clusterName}/access-entries/{principalArn}",
            )
            .with_input(structure([
                cluster_name(),
                principal_arn(),
                optional("kubernetesGroups", string_list()),
                client_request_token(),
                optional("username", string()),
            ]))
            .with_output(single("accessEntry", access_entry())),
        op(
            "AssociateAccessPolicy",
            "Associates an access policy and its scope to an access entry.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/access-entries/{principalArn}/access-policies",
        )
        .with_input(structure([
            cluster_name(),
            principal_arn(),
            required("policyArn", string()),
            required("accessScope", access_scope()),
        ]))
        .with_output(structure([
            optional("clusterName", string()),
            optional("principalArn", string()),
            optional("associatedAccessPolicy", associated_access_policy()),
        ])),
        op(
            "DisassociateAccessPolicy",
            "Disassociates an access policy from an access entry.",
        )
        .with_http(
            "DELETE",
            "/clusters/{clusterName}/access-entries/{principalArn}/access-policies/{policyArn}",
        )
        .with_input(structure([
            cluster_name(),
            principal_arn(),
            required("policyArn", string()).path(),
        ])),
        op(
            "ListAssociatedAccessPolicies",
            "Lists the access policies associated with an access entry.",
        )
        .with_http(
            "GET",
            "/clusters/{clusterName}/access-entries/{principalArn}/access-policies",
        )
        .with_input(structure(paginated(vec![cluster_name(), principal_arn()])))
        .with_output(structure([
            optional("clusterName", string()),
            optional("principalArn", string()),
            optional("nextToken", string()),
            optional("associatedAccessPolicies", list(associated_access_policy())),
        ])),
        op(
            "ListAccessPolicies",
            "Lists the available access policies.",
        )
        .with_http("GET", "/access-policies")
        .with_input(structure(paginated(vec![])))
        .with_output(page_of(
            "accessPolicies",
            structure([optional("name", string()), optional("arn", string())]),
        )),
    ]
}

fn pod_identity_operations() -> Vec<Operation> {
    let association_id = || required("associationId", string()).path();
    vec![
        op(
            "CreatePodIdentityAssociation",
            "Creates an EKS Pod Identity association between a service account in an Amazon EKS cluster and an IAM role with EKS Pod Identity.",
        )
        .with_http("POST", "/clusters/{clusterName}/pod-identity-associations")
        .with_input(structure([
            cluster_name(),
            required("namespace", string()),
            required("serviceAccount", string()),
            required("roleArn", string()),
            client_request_token(),
            tags(),
            optional("disableSessionTags", boolean()),
            optional("targetRoleArn", string()),
        ]))
        .with_output(single("association", pod_identity_association())),
        op(
            "DeletePodIdentityAssociation",
            "Deletes a EKS Pod Identity association.",
        )
        .with_http(
            "DELETE",
            "/clusters/{clusterName}/pod-identity-associations/{associationId}",
        )
        .with_input(structure([cluster_name(), association_id()]))
        .with_output(single("association", pod_identity_association())),
        op(
            "DescribePodIdentityAssociation",
            "Returns descriptive information about an EKS Pod Identity association.",
        )
        .with_http(
            "GET",
            "/clusters/{clusterName}/pod-identity-associations/{associationId}",
        )
        .with_input(structure([cluster_name(), association_id()]))
        .with_output(single("association", pod_identity_association())),
        op(
            "ListPodIdentityAssociations",
            "List the EKS Pod Identity associations in a cluster.",
        )
        .with_http("GET", "/clusters/{clusterName}/pod-identity-associations")
        .with_input(structure(paginated(vec![
            cluster_name(),
            optional("namespace", string()).query("namespace"),
            optional("serviceAccount", string()).query("serviceAccount"),
        ])))
        .with_output(page_of("associations", pod_identity_association())),
        op(
            "UpdatePodIdentityAssociation",
            "Updates a EKS Pod Identity association.",
        )
        .with_http(
            "POST",
            "/clusters/{clusterName}/pod-identity-associations/{associationId}",
        )
        .with_input(structure([
            cluster_name(),
            association_id(),
            optional("roleArn", string()),
            client_request_token(),
            optional("disableSessionTags", boolean()),
            optional("targetRoleArn", string()),
        ]))
        .with_output(single("association", pod_identity_association())),
    ]
}

fn insight_operations() -> Vec<Operation> {
    vec![
        op(
            "DescribeInsight",
            "Returns details about an insight that you specify using its ID.",
        )
        .with_http("GET", "/clusters/{clusterName}/insights/{id}")
        .with_input(structure([
            cluster_name(),
            required("id", string()).path(),
        ]))
        .with_output(single("insight", insight())),
        op(
            "ListInsights",
            "Returns a list of all insights checked for against the specified cluster.",
        )
        .with_http("POST", "/clusters/{clusterName}/insights")
        .with_input(structure([
            cluster_name(),
            optional(
                "filter",
                structure([
                    optional("categories", string_list()),
                    optional("kubernetesVersions", string_list()),
                    optional("statuses", string_list()),
                ]),
            ),
            optional("maxResults", integer()),
            optional("nextToken", string()),
        ]))
        .with_output(page_of("insights", insight())),
    ]
}

fn subscription_operations() -> Vec<Operation> {
    let id = || required("id", string()).path();
    vec![
        op(
            "CreateEksAnywhereSubscription",
            "Creates an EKS Anywhere subscription.",
        )
        .with_http("POST", "/eks-anywhere-subscriptions")
        .with_input(structure([
            required("name", string()),
            required("term", subscription_term()),
            optional("licenseQuantity", integer()),
            optional("licenseType", enumeration(&["Cluster"])),
            optional("autoRenew", boolean()),
            client_request_token(),
            tags(),
        ]))
        .with_output(single("subscription", subscription())),
        op(
            "DeleteEksAnywhereSubscription",
            "Deletes an expired or inactive subscription.",
        )
        .with_http("DELETE", "/eks-anywhere-subscriptions/{id}")
        .with_input(structure([id()]))
        .with_output(single("subscription", subscription())),
        op(
            "DescribeEksAnywhereSubscription",
            "Returns descriptive information about a subscription.",
        )
        .with_http("GET", "/eks-anywhere-subscriptions/{id}")
        .with_input(structure([id()]))
        .with_output(single("subscription", subscription())),
        op(
            "ListEksAnywhereSubscriptions",
            "Displays the full description of the subscription.",
        )
        .with_http("GET", "/eks-anywhere-subscriptions")
        .with_input(structure(paginated(vec![
            optional("includeStatus", string_list()).query("includeStatus"),
        ])))
        .with_output(page_of("subscriptions", subscription())),
        op(
            "UpdateEksAnywhereSubscription",
            "Update an EKS Anywhere Subscription.",
        )
        .with_http("POST", "/eks-anywhere-subscriptions/{id}")
        .with_input(structure([
            id(),
            required("autoRenew", boolean()),
            client_request_token(),
        ]))
        .with_output(single("subscription", subscription())),
    ]
}

fn tag_operations() -> Vec<Operation> {
    let resource_arn = || required("resourceArn", string()).path();
    vec![
        op(
            "TagResource",
            "Associates the specified tags to an Amazon EKS resource with the specified resourceArn.",
        )
        .with_http("POST", "/tags/{resourceArn}")
        .with_input(structure([
            resource_arn(),
            required("tags", string_map()),
        ])),
        op(
            "UntagResource",
            "Deletes specified tags from an Amazon EKS resource.",
        )
        .with_http("DELETE", "/tags/{resourceArn}")
        .with_input(structure([
            resource_arn(),
            required("tagKeys", string_list()).query("tagKeys"),
        ])),
        op(
            "ListTagsForResource",
            "List the tags for an Amazon EKS resource.",
        )
        .with_http("GET", "/tags/{resourceArn}")
        .with_input(structure([resource_arn()]))
        .with_output(single("tags", string_map())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::Location;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let operations = operations();
        let names: HashSet<_> = operations.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names.len(), operations.len());
        assert_eq!(operations.len(), 57);
    }

    #[test]
    fn test_every_path_label_is_bound() {
        for operation in operations() {
            let uri = &operation.http.uri;
            for member in operation.input.members() {
                if member.location == Location::Path {
                    assert!(
                        uri.contains(&format!("{{{}}}", member.name)),
                        "{} binds {} but {} has no such label",
                        operation.name,
                        member.name,
                        uri
                    );
                    assert!(member.required, "{}.{}", operation.name, member.name);
                }
            }
            let labels = uri.matches('{').count();
            let bound = operation
                .input
                .members()
                .iter()
                .filter(|m| m.location == Location::Path)
                .count();
            assert_eq!(labels, bound, "{}", operation.name);
        }
    }

    #[test]
    fn test_delete_addon_binding() {
        let operation = operations()
            .into_iter()
            .find(|o| o.name == "DeleteAddon")
            .unwrap();
        assert_eq!(operation.http.method, "DELETE");
        assert_eq!(
            operation.http.uri,
            "/clusters/{clusterName}/addons/{addonName}"
        );
        assert_eq!(operation.title, "Delete Addon");
        assert_eq!(operation.block_id(), "eks.deleteAddon");
        assert_eq!(
            operation.input.member("preserve").unwrap().location,
            Location::Query("preserve".to_string())
        );
    }

    #[test]
    fn test_create_cluster_requirements() {
        let operation = operations()
            .into_iter()
            .find(|o| o.name == "CreateCluster")
            .unwrap();
        assert_eq!(
            operation.input.required_members(),
            vec!["name", "roleArn", "resourcesVpcConfig"]
        );
    }
}
