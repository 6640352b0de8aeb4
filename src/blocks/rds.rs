//! Amazon RDS operations.
//!
//! RDS speaks the query protocol. List shapes carry the XML element name of
//! their items (`VpcSecurityGroupIds.VpcSecurityGroupId.1` on the way out,
//! `<DBInstances><DBInstance>` on the way back), so the names below follow
//! the RDS API model exactly.

use super::operation::Operation;
use super::schema::{
    boolean, integer, list, list_of, number, optional, required, string, structure, timestamp,
    Member, Shape,
};
use crate::service::Service;

fn op(name: &str, description: &str) -> Operation {
    Operation::new(Service::Rds, name, description)
}

// ============================================================================
// Shared members
// ============================================================================

fn paged(mut members: Vec<Member>) -> Vec<Member> {
    members.push(optional("MaxRecords", integer()));
    members.push(optional("Marker", string()));
    members
}

fn filters() -> Member {
    optional(
        "Filters",
        list_of(
            structure([
                required("Name", string()),
                required("Values", list_of(string(), "Value")),
            ]),
            "Filter",
        ),
    )
}

fn tags_input() -> Member {
    optional("Tags", tag_list())
}

fn vpc_security_group_ids() -> Member {
    optional(
        "VpcSecurityGroupIds",
        list_of(string(), "VpcSecurityGroupId"),
    )
}

fn cloudwatch_logs_exports() -> Member {
    optional("EnableCloudwatchLogsExports", list(string()))
}

fn instance_identifier() -> Member {
    required("DBInstanceIdentifier", string())
}

fn cluster_identifier() -> Member {
    required("DBClusterIdentifier", string())
}

fn single(name: &str, shape: Shape) -> Shape {
    structure([optional(name, shape)])
}

fn page(name: &str, item: Shape, item_name: &str) -> Shape {
    structure([
        optional("Marker", string()),
        optional(name, list_of(item, item_name)),
    ])
}

// ============================================================================
// Shared shapes
// ============================================================================

fn tag() -> Shape {
    structure([optional("Key", string()), optional("Value", string())])
}

fn tag_list() -> Shape {
    list_of(tag(), "Tag")
}

fn endpoint() -> Shape {
    structure([
        optional("Address", string()),
        optional("Port", integer()),
        optional("HostedZoneId", string()),
    ])
}

fn vpc_security_group_membership() -> Shape {
    list_of(
        structure([
            optional("VpcSecurityGroupId", string()),
            optional("Status", string()),
        ]),
        "VpcSecurityGroupMembership",
    )
}

fn processor_features() -> Shape {
    list_of(
        structure([optional("Name", string()), optional("Value", string())]),
        "ProcessorFeature",
    )
}

fn subnet() -> Shape {
    structure([
        optional("SubnetIdentifier", string()),
        optional(
            "SubnetAvailabilityZone",
            structure([optional("Name", string())]),
        ),
        optional("SubnetStatus", string()),
    ])
}

fn db_subnet_group() -> Shape {
    structure([
        optional("DBSubnetGroupName", string()),
        optional("DBSubnetGroupDescription", string()),
        optional("VpcId", string()),
        optional("SubnetGroupStatus", string()),
        optional("Subnets", list_of(subnet(), "Subnet")),
        optional("DBSubnetGroupArn", string()),
        optional("SupportedNetworkTypes", list(string())),
    ])
}

fn master_user_secret() -> Shape {
    structure([
        optional("SecretArn", string()),
        optional("SecretStatus", string()),
        optional("KmsKeyId", string()),
    ])
}

fn db_instance() -> Shape {
    structure([
        optional("DBInstanceIdentifier", string()),
        optional("DBInstanceClass", string()),
        optional("Engine", string()),
        optional("DBInstanceStatus", string()),
        optional("MasterUsername", string()),
        optional("DBName", string()),
        optional("Endpoint", endpoint()),
        optional("AllocatedStorage", integer()),
        optional("InstanceCreateTime", timestamp()),
        optional("PreferredBackupWindow", string()),
        optional("BackupRetentionPeriod", integer()),
        optional(
            "DBSecurityGroups",
            list_of(
                structure([
                    optional("DBSecurityGroupName", string()),
                    optional("Status", string()),
                ]),
                "DBSecurityGroup",
            ),
        ),
        optional("VpcSecurityGroups", vpc_security_group_membership()),
        optional(
            "DBParameterGroups",
            list_of(
                structure([
                    optional("DBParameterGroupName", string()),
                    optional("ParameterApplyStatus", string()),
                ]),
                "DBParameterGroup",
            ),
        ),
        optional("AvailabilityZone", string()),
        optional("DBSubnetGroup", db_subnet_group()),
        optional("PreferredMaintenanceWindow", string()),
        optional(
            "PendingModifiedValues",
            structure([
                optional("DBInstanceClass", string()),
                optional("AllocatedStorage", integer()),
                optional("MasterUserPassword", string()),
                optional("Port", integer()),
                optional("BackupRetentionPeriod", integer()),
                optional("MultiAZ", boolean()),
                optional("EngineVersion", string()),
                optional("Iops", integer()),
                optional("DBInstanceIdentifier", string()),
                optional("StorageType", string()),
            ]),
        ),
        optional("LatestRestorableTime", timestamp()),
        optional("MultiAZ", boolean()),
        optional("EngineVersion", string()),
        optional("AutoMinorVersionUpgrade", boolean()),
        optional("ReadReplicaSourceDBInstanceIdentifier", string()),
        optional(
            "ReadReplicaDBInstanceIdentifiers",
            list_of(string(), "ReadReplicaDBInstanceIdentifier"),
        ),
        optional(
            "ReadReplicaDBClusterIdentifiers",
            list_of(string(), "ReadReplicaDBClusterIdentifier"),
        ),
        optional("LicenseModel", string()),
        optional("Iops", integer()),
        optional(
            "OptionGroupMemberships",
            list_of(
                structure([
                    optional("OptionGroupName", string()),
                    optional("Status", string()),
                ]),
                "OptionGroupMembership",
            ),
        ),
        optional("CharacterSetName", string()),
        optional("SecondaryAvailabilityZone", string()),
        optional("PubliclyAccessible", boolean()),
        optional(
            "StatusInfos",
            list_of(
                structure([
                    optional("StatusType", string()),
                    optional("Normal", boolean()),
                    optional("Status", string()),
                    optional("Message", string()),
                ]),
                "DBInstanceStatusInfo",
            ),
        ),
        optional("StorageType", string()),
        optional("DbInstancePort", integer()),
        optional("DBClusterIdentifier", string()),
        optional("StorageEncrypted", boolean()),
        optional("KmsKeyId", string()),
        optional("DbiResourceId", string()),
        optional("CACertificateIdentifier", string()),
        optional(
            "DomainMemberships",
            list_of(
                structure([
                    optional("Domain", string()),
                    optional("Status", string()),
                    optional("FQDN", string()),
                    optional("IAMRoleName", string()),
                ]),
                "DomainMembership",
            ),
        ),
        optional("CopyTagsToSnapshot", boolean()),
        optional("MonitoringInterval", integer()),
        optional("EnhancedMonitoringResourceArn", string()),
        optional("MonitoringRoleArn", string()),
        optional("PromotionTier", integer()),
        optional("DBInstanceArn", string()),
        optional("Timezone", string()),
        optional("IAMDatabaseAuthenticationEnabled", boolean()),
        optional("PerformanceInsightsEnabled", boolean()),
        optional("PerformanceInsightsKMSKeyId", string()),
        optional("PerformanceInsightsRetentionPeriod", integer()),
        optional("EnabledCloudwatchLogsExports", list(string())),
        optional("ProcessorFeatures", processor_features()),
        optional("DeletionProtection", boolean()),
        optional(
            "AssociatedRoles",
            list_of(
                structure([
                    optional("RoleArn", string()),
                    optional("FeatureName", string()),
                    optional("Status", string()),
                ]),
                "DBInstanceRole",
            ),
        ),
        optional("ListenerEndpoint", endpoint()),
        optional("MaxAllocatedStorage", integer()),
        optional("TagList", tag_list()),
        optional("NetworkType", string()),
        optional("StorageThroughput", integer()),
        optional("MasterUserSecret", master_user_secret()),
        optional("DedicatedLogVolume", boolean()),
        optional("MultiTenant", boolean()),
    ])
}

fn db_cluster() -> Shape {
    structure([
        optional("AllocatedStorage", integer()),
        optional(
            "AvailabilityZones",
            list_of(string(), "AvailabilityZone"),
        ),
        optional("BackupRetentionPeriod", integer()),
        optional("CharacterSetName", string()),
        optional("DatabaseName", string()),
        optional("DBClusterIdentifier", string()),
        optional("DBClusterParameterGroup", string()),
        optional("DBSubnetGroup", string()),
        optional("Status", string()),
        optional("PercentProgress", string()),
        optional("EarliestRestorableTime", timestamp()),
        optional("Endpoint", string()),
        optional("ReaderEndpoint", string()),
        optional("CustomEndpoints", list(string())),
        optional("MultiAZ", boolean()),
        optional("Engine", string()),
        optional("EngineVersion", string()),
        optional("LatestRestorableTime", timestamp()),
        optional("Port", integer()),
        optional("MasterUsername", string()),
        optional(
            "DBClusterOptionGroupMemberships",
            list_of(
                structure([
                    optional("DBClusterOptionGroupName", string()),
                    optional("Status", string()),
                ]),
                "DBClusterOptionGroup",
            ),
        ),
        optional("PreferredBackupWindow", string()),
        optional("PreferredMaintenanceWindow", string()),
        optional("ReplicationSourceIdentifier", string()),
        optional(
            "ReadReplicaIdentifiers",
            list_of(string(), "ReadReplicaIdentifier"),
        ),
        optional(
            "DBClusterMembers",
            list_of(
                structure([
                    optional("DBInstanceIdentifier", string()),
                    optional("IsClusterWriter", boolean()),
                    optional("DBClusterParameterGroupStatus", string()),
                    optional("PromotionTier", integer()),
                ]),
                "DBClusterMember",
            ),
        ),
        optional("VpcSecurityGroups", vpc_security_group_membership()),
        optional("HostedZoneId", string()),
        optional("StorageEncrypted", boolean()),
        optional("KmsKeyId", string()),
        optional("DbClusterResourceId", string()),
        optional("DBClusterArn", string()),
        optional(
            "AssociatedRoles",
            list_of(
                structure([
                    optional("RoleArn", string()),
                    optional("Status", string()),
                    optional("FeatureName", string()),
                ]),
                "DBClusterRole",
            ),
        ),
        optional("IAMDatabaseAuthenticationEnabled", boolean()),
        optional("CloneGroupId", string()),
        optional("ClusterCreateTime", timestamp()),
        optional("EarliestBacktrackTime", timestamp()),
        optional("BacktrackWindow", integer()),
        optional("BacktrackConsumedChangeRecords", integer()),
        optional("EnabledCloudwatchLogsExports", list(string())),
        optional("Capacity", integer()),
        optional("EngineMode", string()),
        optional("DeletionProtection", boolean()),
        optional("HttpEndpointEnabled", boolean()),
        optional("CopyTagsToSnapshot", boolean()),
        optional("CrossAccountClone", boolean()),
        optional("TagList", tag_list()),
        optional("DBClusterInstanceClass", string()),
        optional("StorageType", string()),
        optional("Iops", integer()),
        optional("PubliclyAccessible", boolean()),
        optional("AutoMinorVersionUpgrade", boolean()),
        optional("MonitoringInterval", integer()),
        optional("MonitoringRoleArn", string()),
        optional("PerformanceInsightsEnabled", boolean()),
        optional("NetworkType", string()),
        optional(
            "ServerlessV2ScalingConfiguration",
            structure([
                optional("MinCapacity", number()),
                optional("MaxCapacity", number()),
                optional("SecondsUntilAutoPause", integer()),
            ]),
        ),
        optional("MasterUserSecret", master_user_secret()),
        optional("StorageThroughput", integer()),
    ])
}

fn db_snapshot() -> Shape {
    structure([
        optional("DBSnapshotIdentifier", string()),
        optional("DBInstanceIdentifier", string()),
        optional("SnapshotCreateTime", timestamp()),
        optional("Engine", string()),
        optional("AllocatedStorage", integer()),
        optional("Status", string()),
        optional("Port", integer()),
        optional("AvailabilityZone", string()),
        optional("VpcId", string()),
        optional("InstanceCreateTime", timestamp()),
        optional("MasterUsername", string()),
        optional("EngineVersion", string()),
        optional("LicenseModel", string()),
        optional("SnapshotType", string()),
        optional("Iops", integer()),
        optional("OptionGroupName", string()),
        optional("PercentProgress", integer()),
        optional("SourceRegion", string()),
        optional("SourceDBSnapshotIdentifier", string()),
        optional("StorageType", string()),
        optional("Encrypted", boolean()),
        optional("KmsKeyId", string()),
        optional("DBSnapshotArn", string()),
        optional("Timezone", string()),
        optional("IAMDatabaseAuthenticationEnabled", boolean()),
        optional("ProcessorFeatures", processor_features()),
        optional("DbiResourceId", string()),
        optional("TagList", tag_list()),
        optional("OriginalSnapshotCreateTime", timestamp()),
        optional("SnapshotTarget", string()),
        optional("StorageThroughput", integer()),
    ])
}

fn db_cluster_snapshot() -> Shape {
    structure([
        optional(
            "AvailabilityZones",
            list_of(string(), "AvailabilityZone"),
        ),
        optional("DBClusterSnapshotIdentifier", string()),
        optional("DBClusterIdentifier", string()),
        optional("SnapshotCreateTime", timestamp()),
        optional("Engine", string()),
        optional("EngineMode", string()),
        optional("AllocatedStorage", integer()),
        optional("Status", string()),
        optional("Port", integer()),
        optional("VpcId", string()),
        optional("ClusterCreateTime", timestamp()),
        optional("MasterUsername", string()),
        optional("EngineVersion", string()),
        optional("LicenseModel", string()),
        optional("SnapshotType", string()),
        optional("PercentProgress", integer()),
        optional("StorageEncrypted", boolean()),
        optional("KmsKeyId", string()),
        optional("DBClusterSnapshotArn", string()),
        optional("SourceDBClusterSnapshotArn", string()),
        optional("IAMDatabaseAuthenticationEnabled", boolean()),
        optional("TagList", tag_list()),
        optional("DbClusterResourceId", string()),
        optional("StorageType", string()),
    ])
}

fn parameter() -> Shape {
    structure([
        optional("ParameterName", string()),
        optional("ParameterValue", string()),
        optional("Description", string()),
        optional("Source", string()),
        optional("ApplyType", string()),
        optional("DataType", string()),
        optional("AllowedValues", string()),
        optional("IsModifiable", boolean()),
        optional("MinimumEngineVersion", string()),
        optional("ApplyMethod", string()),
        optional("SupportedEngineModes", list(string())),
    ])
}

fn parameters_input(required_list: bool) -> Member {
    let shape = list_of(parameter(), "Parameter");
    if required_list {
        required("Parameters", shape)
    } else {
        optional("Parameters", shape)
    }
}

fn db_parameter_group() -> Shape {
    structure([
        optional("DBParameterGroupName", string()),
        optional("DBParameterGroupFamily", string()),
        optional("Description", string()),
        optional("DBParameterGroupArn", string()),
    ])
}

fn db_cluster_parameter_group() -> Shape {
    structure([
        optional("DBClusterParameterGroupName", string()),
        optional("DBParameterGroupFamily", string()),
        optional("Description", string()),
        optional("DBClusterParameterGroupArn", string()),
    ])
}

fn option_setting() -> Shape {
    structure([
        optional("Name", string()),
        optional("Value", string()),
        optional("DefaultValue", string()),
        optional("Description", string()),
        optional("ApplyType", string()),
        optional("DataType", string()),
        optional("AllowedValues", string()),
        optional("IsModifiable", boolean()),
        optional("IsCollection", boolean()),
    ])
}

fn option_group() -> Shape {
    structure([
        optional("OptionGroupName", string()),
        optional("OptionGroupDescription", string()),
        optional("EngineName", string()),
        optional("MajorEngineVersion", string()),
        optional(
            "Options",
            list_of(
                structure([
                    optional("OptionName", string()),
                    optional("OptionDescription", string()),
                    optional("Persistent", boolean()),
                    optional("Permanent", boolean()),
                    optional("Port", integer()),
                    optional("OptionVersion", string()),
                    optional(
                        "OptionSettings",
                        list_of(option_setting(), "OptionSetting"),
                    ),
                    optional(
                        "DBSecurityGroupMemberships",
                        list_of(
                            structure([
                                optional("DBSecurityGroupName", string()),
                                optional("Status", string()),
                            ]),
                            "DBSecurityGroup",
                        ),
                    ),
                    optional(
                        "VpcSecurityGroupMemberships",
                        vpc_security_group_membership(),
                    ),
                ]),
                "Option",
            ),
        ),
        optional("AllowsVpcAndNonVpcInstanceMemberships", boolean()),
        optional("VpcId", string()),
        optional("OptionGroupArn", string()),
        optional("SourceOptionGroup", string()),
        optional("SourceAccountId", string()),
        optional("CopyTimestamp", timestamp()),
    ])
}

fn event() -> Shape {
    structure([
        optional("SourceIdentifier", string()),
        optional("SourceType", string()),
        optional("Message", string()),
        optional("EventCategories", list_of(string(), "EventCategory")),
        optional("Date", timestamp()),
        optional("SourceArn", string()),
    ])
}

fn engine_version() -> Shape {
    structure([
        optional("Engine", string()),
        optional("EngineVersion", string()),
        optional("DBParameterGroupFamily", string()),
        optional("DBEngineDescription", string()),
        optional("DBEngineVersionDescription", string()),
        optional(
            "ValidUpgradeTarget",
            list_of(
                structure([
                    optional("Engine", string()),
                    optional("EngineVersion", string()),
                    optional("Description", string()),
                    optional("AutoUpgrade", boolean()),
                    optional("IsMajorVersionUpgrade", boolean()),
                ]),
                "UpgradeTarget",
            ),
        ),
        optional("ExportableLogTypes", list(string())),
        optional("SupportsLogExportsToCloudwatchLogs", boolean()),
        optional("SupportsReadReplica", boolean()),
        optional("SupportedEngineModes", list(string())),
        optional("Status", string()),
        optional("SupportsParallelQuery", boolean()),
        optional("SupportsGlobalDatabases", boolean()),
        optional("TagList", tag_list()),
    ])
}

fn orderable_option() -> Shape {
    structure([
        optional("Engine", string()),
        optional("EngineVersion", string()),
        optional("DBInstanceClass", string()),
        optional("LicenseModel", string()),
        optional("AvailabilityZoneGroup", string()),
        optional(
            "AvailabilityZones",
            list_of(structure([optional("Name", string())]), "AvailabilityZone"),
        ),
        optional("MultiAZCapable", boolean()),
        optional("ReadReplicaCapable", boolean()),
        optional("Vpc", boolean()),
        optional("SupportsStorageEncryption", boolean()),
        optional("StorageType", string()),
        optional("SupportsIops", boolean()),
        optional("SupportsEnhancedMonitoring", boolean()),
        optional("SupportsIAMDatabaseAuthentication", boolean()),
        optional("SupportsPerformanceInsights", boolean()),
        optional("MinStorageSize", integer()),
        optional("MaxStorageSize", integer()),
        optional("MinIopsPerDbInstance", integer()),
        optional("MaxIopsPerDbInstance", integer()),
        optional("SupportedEngineModes", list(string())),
        optional("SupportedNetworkTypes", list(string())),
    ])
}

// ============================================================================
// Operations
// ============================================================================

/// Every RDS operation in catalog order.
pub fn operations() -> Vec<Operation> {
    let mut operations = Vec::new();
    operations.extend(instance_operations());
    operations.extend(cluster_operations());
    operations.extend(snapshot_operations());
    operations.extend(parameter_group_operations());
    operations.extend(subnet_group_operations());
    operations.extend(option_group_operations());
    operations.extend(event_operations());
    operations.extend(engine_operations());
    operations.extend(tag_operations());
    operations.extend(log_operations());
    operations
}

fn instance_operations() -> Vec<Operation> {
    vec![
        op("CreateDBInstance", "Creates a new DB instance.")
            .with_input(structure([
                optional("DBName", string()),
                instance_identifier(),
                optional("AllocatedStorage", integer()),
                required("DBInstanceClass", string()),
                required("Engine", string()),
                optional("MasterUsername", string()),
                optional("MasterUserPassword", string()),
                optional(
                    "DBSecurityGroups",
                    list_of(string(), "DBSecurityGroupName"),
                ),
                vpc_security_group_ids(),
                optional("AvailabilityZone", string()),
                optional("DBSubnetGroupName", string()),
                optional("PreferredMaintenanceWindow", string()),
                optional("DBParameterGroupName", string()),
                optional("BackupRetentionPeriod", integer()),
                optional("PreferredBackupWindow", string()),
                optional("Port", integer()),
                optional("MultiAZ", boolean()),
                optional("EngineVersion", string()),
                optional("AutoMinorVersionUpgrade", boolean()),
                optional("LicenseModel", string()),
                optional("Iops", integer()),
                optional("OptionGroupName", string()),
                optional("CharacterSetName", string()),
                optional("PubliclyAccessible", boolean()),
                tags_input(),
                optional("DBClusterIdentifier", string()),
                optional("StorageType", string()),
                optional("StorageEncrypted", boolean()),
                optional("KmsKeyId", string()),
                optional("CopyTagsToSnapshot", boolean()),
                optional("MonitoringInterval", integer()),
                optional("MonitoringRoleArn", string()),
                optional("PromotionTier", integer()),
                optional("Timezone", string()),
                optional("EnableIAMDatabaseAuthentication", boolean()),
                optional("EnablePerformanceInsights", boolean()),
                optional("PerformanceInsightsKMSKeyId", string()),
                optional("PerformanceInsightsRetentionPeriod", integer()),
                cloudwatch_logs_exports(),
                optional("ProcessorFeatures", processor_features()),
                optional("DeletionProtection", boolean()),
                optional("MaxAllocatedStorage", integer()),
                optional("NetworkType", string()),
                optional("StorageThroughput", integer()),
                optional("ManageMasterUserPassword", boolean()),
                optional("MasterUserSecretKmsKeyId", string()),
                optional("CACertificateIdentifier", string()),
                optional("DedicatedLogVolume", boolean()),
            ]))
            .with_output(single("DBInstance", db_instance())),
        op(
            "CreateDBInstanceReadReplica",
            "Creates a new DB instance that acts as a read replica for an existing source DB instance or Multi-AZ DB cluster.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("SourceDBInstanceIdentifier", string()),
            optional("DBInstanceClass", string()),
            optional("AvailabilityZone", string()),
            optional("Port", integer()),
            optional("MultiAZ", boolean()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("Iops", integer()),
            optional("OptionGroupName", string()),
            optional("DBParameterGroupName", string()),
            optional("PubliclyAccessible", boolean()),
            tags_input(),
            optional("DBSubnetGroupName", string()),
            vpc_security_group_ids(),
            optional("StorageType", string()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("MonitoringInterval", integer()),
            optional("MonitoringRoleArn", string()),
            optional("KmsKeyId", string()),
            optional("PreSignedUrl", string()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("EnablePerformanceInsights", boolean()),
            cloudwatch_logs_exports(),
            optional("ProcessorFeatures", processor_features()),
            optional("DeletionProtection", boolean()),
            optional("ReplicaMode", string()),
            optional("MaxAllocatedStorage", integer()),
            optional("NetworkType", string()),
            optional("StorageThroughput", integer()),
            optional("SourceDBClusterIdentifier", string()),
            optional("AllocatedStorage", integer()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "DeleteDBInstance",
            "Deletes a previously provisioned DB instance.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("SkipFinalSnapshot", boolean()),
            optional("FinalDBSnapshotIdentifier", string()),
            optional("DeleteAutomatedBackups", boolean()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "DescribeDBInstances",
            "Describes provisioned RDS instances.",
        )
        .with_input(structure(paged(vec![
            optional("DBInstanceIdentifier", string()),
            filters(),
        ])))
        .with_output(page("DBInstances", db_instance(), "DBInstance")),
        op(
            "ModifyDBInstance",
            "Modifies settings for a DB instance.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("AllocatedStorage", integer()),
            optional("DBInstanceClass", string()),
            optional("DBSubnetGroupName", string()),
            optional(
                "DBSecurityGroups",
                list_of(string(), "DBSecurityGroupName"),
            ),
            vpc_security_group_ids(),
            optional("ApplyImmediately", boolean()),
            optional("MasterUserPassword", string()),
            optional("DBParameterGroupName", string()),
            optional("BackupRetentionPeriod", integer()),
            optional("PreferredBackupWindow", string()),
            optional("PreferredMaintenanceWindow", string()),
            optional("MultiAZ", boolean()),
            optional("EngineVersion", string()),
            optional("AllowMajorVersionUpgrade", boolean()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("LicenseModel", string()),
            optional("Iops", integer()),
            optional("OptionGroupName", string()),
            optional("NewDBInstanceIdentifier", string()),
            optional("StorageType", string()),
            optional("CACertificateIdentifier", string()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("MonitoringInterval", integer()),
            optional("DBPortNumber", integer()),
            optional("PubliclyAccessible", boolean()),
            optional("MonitoringRoleArn", string()),
            optional("PromotionTier", integer()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("EnablePerformanceInsights", boolean()),
            optional("PerformanceInsightsKMSKeyId", string()),
            optional("PerformanceInsightsRetentionPeriod", integer()),
            optional(
                "CloudwatchLogsExportConfiguration",
                structure([
                    optional("EnableLogTypes", list(string())),
                    optional("DisableLogTypes", list(string())),
                ]),
            ),
            optional("ProcessorFeatures", processor_features()),
            optional("UseDefaultProcessorFeatures", boolean()),
            optional("DeletionProtection", boolean()),
            optional("MaxAllocatedStorage", integer()),
            optional("CertificateRotationRestart", boolean()),
            optional("ReplicaMode", string()),
            optional("NetworkType", string()),
            optional("StorageThroughput", integer()),
            optional("ManageMasterUserPassword", boolean()),
            optional("RotateMasterUserPassword", boolean()),
            optional("MasterUserSecretKmsKeyId", string()),
            optional("Engine", string()),
            optional("DedicatedLogVolume", boolean()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "RebootDBInstance",
            "Restarts the database engine service on a DB instance.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("ForceFailover", boolean()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "StartDBInstance",
            "Starts an Amazon RDS DB instance that was stopped.",
        )
        .with_input(structure([instance_identifier()]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "StopDBInstance",
            "Stops an Amazon RDS DB instance temporarily.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("DBSnapshotIdentifier", string()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "PromoteReadReplica",
            "Promotes a read replica DB instance to a standalone DB instance.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("BackupRetentionPeriod", integer()),
            optional("PreferredBackupWindow", string()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "RestoreDBInstanceFromDBSnapshot",
            "Creates a new DB instance from a DB snapshot.",
        )
        .with_input(structure([
            instance_identifier(),
            optional("DBSnapshotIdentifier", string()),
            optional("DBInstanceClass", string()),
            optional("Port", integer()),
            optional("AvailabilityZone", string()),
            optional("DBSubnetGroupName", string()),
            optional("MultiAZ", boolean()),
            optional("PubliclyAccessible", boolean()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("LicenseModel", string()),
            optional("DBName", string()),
            optional("Engine", string()),
            optional("Iops", integer()),
            optional("OptionGroupName", string()),
            tags_input(),
            optional("StorageType", string()),
            vpc_security_group_ids(),
            optional("CopyTagsToSnapshot", boolean()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            cloudwatch_logs_exports(),
            optional("ProcessorFeatures", processor_features()),
            optional("DBParameterGroupName", string()),
            optional("DeletionProtection", boolean()),
            optional("NetworkType", string()),
            optional("StorageThroughput", integer()),
            optional("DBClusterSnapshotIdentifier", string()),
            optional("AllocatedStorage", integer()),
        ]))
        .with_output(single("DBInstance", db_instance())),
        op(
            "RestoreDBInstanceToPointInTime",
            "Restores a DB instance to an arbitrary point in time.",
        )
        .with_input(structure([
            optional("SourceDBInstanceIdentifier", string()),
            required("TargetDBInstanceIdentifier", string()),
            optional("RestoreTime", timestamp()),
            optional("UseLatestRestorableTime", boolean()),
            optional("DBInstanceClass", string()),
            optional("Port", integer()),
            optional("AvailabilityZone", string()),
            optional("DBSubnetGroupName", string()),
            optional("MultiAZ", boolean()),
            optional("PubliclyAccessible", boolean()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("LicenseModel", string()),
            optional("DBName", string()),
            optional("Engine", string()),
            optional("Iops", integer()),
            optional("OptionGroupName", string()),
            optional("CopyTagsToSnapshot", boolean()),
            tags_input(),
            optional("StorageType", string()),
            vpc_security_group_ids(),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            cloudwatch_logs_exports(),
            optional("ProcessorFeatures", processor_features()),
            optional("DBParameterGroupName", string()),
            optional("DeletionProtection", boolean()),
            optional("SourceDbiResourceId", string()),
            optional("MaxAllocatedStorage", integer()),
            optional("SourceDBInstanceAutomatedBackupsArn", string()),
            optional("NetworkType", string()),
            optional("StorageThroughput", integer()),
            optional("AllocatedStorage", integer()),
        ]))
        .with_output(single("DBInstance", db_instance())),
    ]
}

fn cluster_operations() -> Vec<Operation> {
    vec![
        op(
            "CreateDBCluster",
            "Creates a new Amazon Aurora DB cluster or Multi-AZ DB cluster.",
        )
        .with_input(structure([
            optional(
                "AvailabilityZones",
                list_of(string(), "AvailabilityZone"),
            ),
            optional("BackupRetentionPeriod", integer()),
            optional("CharacterSetName", string()),
            optional("DatabaseName", string()),
            cluster_identifier(),
            optional("DBClusterParameterGroupName", string()),
            vpc_security_group_ids(),
            optional("DBSubnetGroupName", string()),
            required("Engine", string()),
            optional("EngineVersion", string()),
            optional("Port", integer()),
            optional("MasterUsername", string()),
            optional("MasterUserPassword", string()),
            optional("OptionGroupName", string()),
            optional("PreferredBackupWindow", string()),
            optional("PreferredMaintenanceWindow", string()),
            optional("ReplicationSourceIdentifier", string()),
            tags_input(),
            optional("StorageEncrypted", boolean()),
            optional("KmsKeyId", string()),
            optional("PreSignedUrl", string()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("BacktrackWindow", integer()),
            cloudwatch_logs_exports(),
            optional("EngineMode", string()),
            optional("DeletionProtection", boolean()),
            optional("GlobalClusterIdentifier", string()),
            optional("EnableHttpEndpoint", boolean()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("DBClusterInstanceClass", string()),
            optional("AllocatedStorage", integer()),
            optional("StorageType", string()),
            optional("Iops", integer()),
            optional("PubliclyAccessible", boolean()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("MonitoringInterval", integer()),
            optional("MonitoringRoleArn", string()),
            optional("EnablePerformanceInsights", boolean()),
            optional("PerformanceInsightsKMSKeyId", string()),
            optional("PerformanceInsightsRetentionPeriod", integer()),
            optional(
                "ServerlessV2ScalingConfiguration",
                structure([
                    optional("MinCapacity", number()),
                    optional("MaxCapacity", number()),
                    optional("SecondsUntilAutoPause", integer()),
                ]),
            ),
            optional("NetworkType", string()),
            optional("ManageMasterUserPassword", boolean()),
            optional("MasterUserSecretKmsKeyId", string()),
            optional("EnableLocalWriteForwarding", boolean()),
            optional("CACertificateIdentifier", string()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "DeleteDBCluster",
            "Deletes a previously provisioned DB cluster.",
        )
        .with_input(structure([
            cluster_identifier(),
            optional("SkipFinalSnapshot", boolean()),
            optional("FinalDBSnapshotIdentifier", string()),
            optional("DeleteAutomatedBackups", boolean()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "DescribeDBClusters",
            "Describes existing Amazon Aurora DB clusters and Multi-AZ DB clusters.",
        )
        .with_input(structure(paged(vec![
            optional("DBClusterIdentifier", string()),
            filters(),
            optional("IncludeShared", boolean()),
        ])))
        .with_output(page("DBClusters", db_cluster(), "DBCluster")),
        op(
            "ModifyDBCluster",
            "Modifies the settings of an Amazon Aurora DB cluster or a Multi-AZ DB cluster.",
        )
        .with_input(structure([
            cluster_identifier(),
            optional("NewDBClusterIdentifier", string()),
            optional("ApplyImmediately", boolean()),
            optional("BackupRetentionPeriod", integer()),
            optional("DBClusterParameterGroupName", string()),
            vpc_security_group_ids(),
            optional("Port", integer()),
            optional("MasterUserPassword", string()),
            optional("OptionGroupName", string()),
            optional("PreferredBackupWindow", string()),
            optional("PreferredMaintenanceWindow", string()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("BacktrackWindow", integer()),
            optional(
                "CloudwatchLogsExportConfiguration",
                structure([
                    optional("EnableLogTypes", list(string())),
                    optional("DisableLogTypes", list(string())),
                ]),
            ),
            optional("EngineVersion", string()),
            optional("AllowMajorVersionUpgrade", boolean()),
            optional("DBInstanceParameterGroupName", string()),
            optional("DeletionProtection", boolean()),
            optional("EnableHttpEndpoint", boolean()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("DBClusterInstanceClass", string()),
            optional("AllocatedStorage", integer()),
            optional("StorageType", string()),
            optional("Iops", integer()),
            optional("AutoMinorVersionUpgrade", boolean()),
            optional("MonitoringInterval", integer()),
            optional("MonitoringRoleArn", string()),
            optional("EnablePerformanceInsights", boolean()),
            optional("PerformanceInsightsKMSKeyId", string()),
            optional("PerformanceInsightsRetentionPeriod", integer()),
            optional(
                "ServerlessV2ScalingConfiguration",
                structure([
                    optional("MinCapacity", number()),
                    optional("MaxCapacity", number()),
                    optional("SecondsUntilAutoPause", integer()),
                ]),
            ),
            optional("NetworkType", string()),
            optional("ManageMasterUserPassword", boolean()),
            optional("RotateMasterUserPassword", boolean()),
            optional("MasterUserSecretKmsKeyId", string()),
            optional("EngineMode", string()),
            optional("EnableLocalWriteForwarding", boolean()),
            optional("CACertificateIdentifier", string()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "StartDBCluster",
            "Starts an Amazon Aurora DB cluster that was stopped.",
        )
        .with_input(structure([cluster_identifier()]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "StopDBCluster",
            "Stops an Amazon Aurora DB cluster.",
        )
        .with_input(structure([cluster_identifier()]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "RebootDBCluster",
            "You might need to reboot your DB cluster, usually for maintenance reasons.",
        )
        .with_input(structure([cluster_identifier()]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "FailoverDBCluster",
            "Forces a failover for a DB cluster.",
        )
        .with_input(structure([
            cluster_identifier(),
            optional("TargetDBInstanceIdentifier", string()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "RestoreDBClusterFromSnapshot",
            "Creates a new DB cluster from a DB snapshot or DB cluster snapshot.",
        )
        .with_input(structure([
            optional(
                "AvailabilityZones",
                list_of(string(), "AvailabilityZone"),
            ),
            cluster_identifier(),
            required("SnapshotIdentifier", string()),
            required("Engine", string()),
            optional("EngineVersion", string()),
            optional("Port", integer()),
            optional("DBSubnetGroupName", string()),
            optional("DatabaseName", string()),
            optional("OptionGroupName", string()),
            vpc_security_group_ids(),
            tags_input(),
            optional("KmsKeyId", string()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("BacktrackWindow", integer()),
            cloudwatch_logs_exports(),
            optional("EngineMode", string()),
            optional("DBClusterParameterGroupName", string()),
            optional("DeletionProtection", boolean()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("DBClusterInstanceClass", string()),
            optional("StorageType", string()),
            optional("Iops", integer()),
            optional("PubliclyAccessible", boolean()),
            optional("NetworkType", string()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
        op(
            "RestoreDBClusterToPointInTime",
            "Restores a DB cluster to an arbitrary point in time.",
        )
        .with_input(structure([
            cluster_identifier(),
            optional("RestoreType", string()),
            optional("SourceDBClusterIdentifier", string()),
            optional("RestoreToTime", timestamp()),
            optional("UseLatestRestorableTime", boolean()),
            optional("Port", integer()),
            optional("DBSubnetGroupName", string()),
            optional("OptionGroupName", string()),
            vpc_security_group_ids(),
            tags_input(),
            optional("KmsKeyId", string()),
            optional("EnableIAMDatabaseAuthentication", boolean()),
            optional("BacktrackWindow", integer()),
            cloudwatch_logs_exports(),
            optional("DBClusterParameterGroupName", string()),
            optional("DeletionProtection", boolean()),
            optional("CopyTagsToSnapshot", boolean()),
            optional("EngineMode", string()),
            optional("DBClusterInstanceClass", string()),
            optional("StorageType", string()),
            optional("PubliclyAccessible", boolean()),
            optional("Iops", integer()),
            optional("NetworkType", string()),
            optional("SourceDbClusterResourceId", string()),
        ]))
        .with_output(single("DBCluster", db_cluster())),
    ]
}

fn snapshot_operations() -> Vec<Operation> {
    vec![
        op("CreateDBSnapshot", "Creates a snapshot of a DB instance.")
            .with_input(structure([
                required("DBSnapshotIdentifier", string()),
                instance_identifier(),
                tags_input(),
            ]))
            .with_output(single("DBSnapshot", db_snapshot())),
        op("DeleteDBSnapshot", "Deletes a DB snapshot.")
            .with_input(structure([required("DBSnapshotIdentifier", string())]))
            .with_output(single("DBSnapshot", db_snapshot())),
        op(
            "DescribeDBSnapshots",
            "Returns information about DB snapshots.",
        )
        .with_input(structure(paged(vec![
            optional("DBInstanceIdentifier", string()),
            optional("DBSnapshotIdentifier", string()),
            optional("SnapshotType", string()),
            filters(),
            optional("IncludeShared", boolean()),
            optional("IncludePublic", boolean()),
            optional("DbiResourceId", string()),
        ])))
        .with_output(page("DBSnapshots", db_snapshot(), "DBSnapshot")),
        op("CopyDBSnapshot", "Copies the specified DB snapshot.")
            .with_input(structure([
                required("SourceDBSnapshotIdentifier", string()),
                required("TargetDBSnapshotIdentifier", string()),
                optional("KmsKeyId", string()),
                tags_input(),
                optional("CopyTags", boolean()),
                optional("PreSignedUrl", string()),
                optional("OptionGroupName", string()),
                optional("TargetCustomAvailabilityZone", string()),
                optional("CopyOptionGroup", boolean()),
            ]))
            .with_output(single("DBSnapshot", db_snapshot())),
        op(
            "CreateDBClusterSnapshot",
            "Creates a snapshot of a DB cluster.",
        )
        .with_input(structure([
            required("DBClusterSnapshotIdentifier", string()),
            cluster_identifier(),
            tags_input(),
        ]))
        .with_output(single("DBClusterSnapshot", db_cluster_snapshot())),
        op(
            "DeleteDBClusterSnapshot",
            "Deletes a DB cluster snapshot.",
        )
        .with_input(structure([required(
            "DBClusterSnapshotIdentifier",
            string(),
        )]))
        .with_output(single("DBClusterSnapshot", db_cluster_snapshot())),
        op(
            "DescribeDBClusterSnapshots",
            "Returns information about DB cluster snapshots.",
        )
        .with_input(structure(paged(vec![
            optional("DBClusterIdentifier", string()),
            optional("DBClusterSnapshotIdentifier", string()),
            optional("SnapshotType", string()),
            filters(),
            optional("IncludeShared", boolean()),
            optional("IncludePublic", boolean()),
            optional("DbClusterResourceId", string()),
        ])))
        .with_output(page(
            "DBClusterSnapshots",
            db_cluster_snapshot(),
            "DBClusterSnapshot",
        )),
        op("CopyDBClusterSnapshot", "Copies a snapshot of a DB cluster.")
            .with_input(structure([
                required("SourceDBClusterSnapshotIdentifier", string()),
                required("TargetDBClusterSnapshotIdentifier", string()),
                optional("KmsKeyId", string()),
                optional("PreSignedUrl", string()),
                optional("CopyTags", boolean()),
                tags_input(),
            ]))
            .with_output(single("DBClusterSnapshot", db_cluster_snapshot())),
    ]
}

fn parameter_group_operations() -> Vec<Operation> {
    let group_name = || required("DBParameterGroupName", string());
    let cluster_group_name = || required("DBClusterParameterGroupName", string());
    vec![
        op("CreateDBParameterGroup", "Creates a new DB parameter group.")
            .with_input(structure([
                group_name(),
                required("DBParameterGroupFamily", string()),
                required("Description", string()),
                tags_input(),
            ]))
            .with_output(single("DBParameterGroup", db_parameter_group())),
        op(
            "DeleteDBParameterGroup",
            "Deletes a specified DB parameter group.",
        )
        .with_input(structure([group_name()])),
        op(
            "DescribeDBParameterGroups",
            "Returns a list of DBParameterGroup descriptions.",
        )
        .with_input(structure(paged(vec![
            optional("DBParameterGroupName", string()),
            filters(),
        ])))
        .with_output(page(
            "DBParameterGroups",
            db_parameter_group(),
            "DBParameterGroup",
        )),
        op(
            "DescribeDBParameters",
            "Returns the detailed parameter list for a particular DB parameter group.",
        )
        .with_input(structure(paged(vec![
            group_name(),
            optional("Source", string()),
            filters(),
        ])))
        .with_output(page("Parameters", parameter(), "Parameter")),
        op(
            "ModifyDBParameterGroup",
            "Modifies the parameters of a DB parameter group.",
        )
        .with_input(structure([group_name(), parameters_input(true)]))
        .with_output(single("DBParameterGroupName", string())),
        op(
            "ResetDBParameterGroup",
            "Modifies the parameters of a DB parameter group to the engine/system default value.",
        )
        .with_input(structure([
            group_name(),
            optional("ResetAllParameters", boolean()),
            parameters_input(false),
        ]))
        .with_output(single("DBParameterGroupName", string())),
        op(
            "CreateDBClusterParameterGroup",
            "Creates a new DB cluster parameter group.",
        )
        .with_input(structure([
            cluster_group_name(),
            required("DBParameterGroupFamily", string()),
            required("Description", string()),
            tags_input(),
        ]))
        .with_output(single(
            "DBClusterParameterGroup",
            db_cluster_parameter_group(),
        )),
        op(
            "DeleteDBClusterParameterGroup",
            "Deletes a specified DB cluster parameter group.",
        )
        .with_input(structure([cluster_group_name()])),
        op(
            "DescribeDBClusterParameterGroups",
            "Returns a list of DBClusterParameterGroup descriptions.",
        )
        .with_input(structure(paged(vec![
            optional("DBClusterParameterGroupName", string()),
            filters(),
        ])))
        .with_output(page(
            "DBClusterParameterGroups",
            db_cluster_parameter_group(),
            "DBClusterParameterGroup",
        )),
        op(
            "DescribeDBClusterParameters",
            "Returns the detailed parameter list for a particular DB cluster parameter group.",
        )
        .with_input(structure(paged(vec![
            cluster_group_name(),
            optional("Source", string()),
            filters(),
        ])))
        .with_output(page("Parameters", parameter(), "Parameter")),
        op(
            "ModifyDBClusterParameterGroup",
            "Modifies the parameters of a DB cluster parameter group.",
        )
        .with_input(structure([cluster_group_name(), parameters_input(true)]))
        .with_output(single("DBClusterParameterGroupName", string())),
        op(
            "ResetDBClusterParameterGroup",
            "Modifies the parameters of a DB cluster parameter group to the default value.",
        )
        .with_input(structure([
            cluster_group_name(),
            optional("ResetAllParameters", boolean()),
            parameters_input(false),
        ]))
        .with_output(single("DBClusterParameterGroupName", string())),
    ]
}

fn subnet_group_operations() -> Vec<Operation> {
    let subnet_ids = || required("SubnetIds", list_of(string(), "SubnetIdentifier"));
    vec![
        op("CreateDBSubnetGroup", "Creates a new DB subnet group.")
            .with_input(structure([
                required("DBSubnetGroupName", string()),
                required("DBSubnetGroupDescription", string()),
                subnet_ids(),
                tags_input(),
            ]))
            .with_output(single("DBSubnetGroup", db_subnet_group())),
        op("DeleteDBSubnetGroup", "Deletes a DB subnet group.")
            .with_input(structure([required("DBSubnetGroupName", string())])),
        op(
            "DescribeDBSubnetGroups",
            "Returns a list of DBSubnetGroup descriptions.",
        )
        .with_input(structure(paged(vec![
            optional("DBSubnetGroupName", string()),
            filters(),
        ])))
        .with_output(page("DBSubnetGroups", db_subnet_group(), "DBSubnetGroup")),
        op(
            "ModifyDBSubnetGroup",
            "Modifies an existing DB subnet group.",
        )
        .with_input(structure([
            required("DBSubnetGroupName", string()),
            optional("DBSubnetGroupDescription", string()),
            subnet_ids(),
        ]))
        .with_output(single("DBSubnetGroup", db_subnet_group())),
    ]
}

fn option_group_operations() -> Vec<Operation> {
    vec![
        op("CreateOptionGroup", "Creates a new option group.")
            .with_input(structure([
                required("OptionGroupName", string()),
                required("EngineName", string()),
                required("MajorEngineVersion", string()),
                required("OptionGroupDescription", string()),
                tags_input(),
            ]))
            .with_output(single("OptionGroup", option_group())),
        op("DeleteOptionGroup", "Deletes an existing option group.")
            .with_input(structure([required("OptionGroupName", string())])),
        op(
            "DescribeOptionGroups",
            "Describes the available option groups.",
        )
        .with_input(structure(paged(vec![
            optional("OptionGroupName", string()),
            filters(),
            optional("EngineName", string()),
            optional("MajorEngineVersion", string()),
        ])))
        .with_output(page("OptionGroupsList", option_group(), "OptionGroup")),
        op(
            "ModifyOptionGroup",
            "Modifies an existing option group.",
        )
        .with_input(structure([
            required("OptionGroupName", string()),
            optional(
                "OptionsToInclude",
                list_of(
                    structure([
                        required("OptionName", string()),
                        optional("Port", integer()),
                        optional("OptionVersion", string()),
                        optional(
                            "DBSecurityGroupMemberships",
                            list_of(string(), "DBSecurityGroupName"),
                        ),
                        optional(
                            "VpcSecurityGroupMemberships",
                            list_of(string(), "VpcSecurityGroupId"),
                        ),
                        optional(
                            "OptionSettings",
                            list_of(option_setting(), "OptionSetting"),
                        ),
                    ]),
                    "OptionConfiguration",
                ),
            ),
            optional("OptionsToRemove", list(string())),
            optional("ApplyImmediately", boolean()),
        ]))
        .with_output(single("OptionGroup", option_group())),
        op(
            "DescribeOptionGroupOptions",
            "Describes all available options for the specified engine.",
        )
        .with_input(structure(paged(vec![
            required("EngineName", string()),
            optional("MajorEngineVersion", string()),
            filters(),
        ])))
        .with_output(page(
            "OptionGroupOptions",
            structure([
                optional("Name", string()),
                optional("Description", string()),
                optional("EngineName", string()),
                optional("MajorEngineVersion", string()),
                optional("MinimumRequiredMinorEngineVersion", string()),
                optional("PortRequired", boolean()),
                optional("DefaultPort", integer()),
                optional("Persistent", boolean()),
                optional("Permanent", boolean()),
                optional("RequiresAutoMinorEngineVersionUpgrade", boolean()),
                optional("VpcOnly", boolean()),
            ]),
            "OptionGroupOption",
        )),
    ]
}

fn event_operations() -> Vec<Operation> {
    vec![
        op(
            "DescribeEvents",
            "Returns events related to DB instances, DB clusters, DB parameter groups, DB security groups, DB snapshots, DB cluster snapshots, and RDS Proxies for the past 14 days.",
        )
        .with_input(structure(paged(vec![
            optional("SourceIdentifier", string()),
            optional("SourceType", string()),
            optional("StartTime", timestamp()),
            optional("EndTime", timestamp()),
            optional("Duration", integer()),
            optional("EventCategories", list_of(string(), "EventCategory")),
            filters(),
        ])))
        .with_output(page("Events", event(), "Event")),
        op(
            "DescribeEventCategories",
            "Displays a list of categories for all event source types, or, if specified, for a specified source type.",
        )
        .with_input(structure([optional("SourceType", string()), filters()]))
        .with_output(single(
            "EventCategoriesMapList",
            list_of(
                structure([
                    optional("SourceType", string()),
                    optional("EventCategories", list_of(string(), "EventCategory")),
                ]),
                "EventCategoriesMap",
            ),
        )),
    ]
}

fn engine_operations() -> Vec<Operation> {
    vec![
        op(
            "DescribeDBEngineVersions",
            "Describes the properties of specific versions of DB engines.",
        )
        .with_input(structure(paged(vec![
            optional("Engine", string()),
            optional("EngineVersion", string()),
            optional("DBParameterGroupFamily", string()),
            filters(),
            optional("DefaultOnly", boolean()),
            optional("ListSupportedCharacterSets", boolean()),
            optional("ListSupportedTimezones", boolean()),
            optional("IncludeAll", boolean()),
        ])))
        .with_output(page("DBEngineVersions", engine_version(), "DBEngineVersion")),
        op(
            "DescribeOrderableDBInstanceOptions",
            "Describes the orderable DB instance options for a specified DB engine.",
        )
        .with_input(structure(paged(vec![
            required("Engine", string()),
            optional("EngineVersion", string()),
            optional("DBInstanceClass", string()),
            optional("LicenseModel", string()),
            optional("AvailabilityZoneGroup", string()),
            optional("Vpc", boolean()),
            filters(),
        ])))
        .with_output(page(
            "OrderableDBInstanceOptions",
            orderable_option(),
            "OrderableDBInstanceOption",
        )),
    ]
}

fn tag_operations() -> Vec<Operation> {
    vec![
        op(
            "AddTagsToResource",
            "Adds metadata tags to an Amazon RDS resource.",
        )
        .with_input(structure([
            required("ResourceName", string()),
            required("Tags", tag_list()),
        ])),
        op(
            "RemoveTagsFromResource",
            "Removes metadata tags from an Amazon RDS resource.",
        )
        .with_input(structure([
            required("ResourceName", string()),
            required("TagKeys", list(string())),
        ])),
        op(
            "ListTagsForResource",
            "Lists all tags on an Amazon RDS resource.",
        )
        .with_input(structure([required("ResourceName", string()), filters()]))
        .with_output(single("TagList", tag_list())),
    ]
}

fn log_operations() -> Vec<Operation> {
    vec![
        op(
            "DescribeDBLogFiles",
            "Returns a list of DB log files for the DB instance.",
        )
        .with_input(structure(paged(vec![
            instance_identifier(),
            optional("FilenameContains", string()),
            optional("FileLastWritten", integer()),
            optional("FileSize", integer()),
            filters(),
        ])))
        .with_output(page(
            "DescribeDBLogFiles",
            structure([
                optional("LogFileName", string()),
                optional("LastWritten", integer()),
                optional("Size", integer()),
            ]),
            "DescribeDBLogFilesDetails",
        )),
        op(
            "DownloadDBLogFilePortion",
            "Downloads all or a portion of the specified log file, up to 1 MB in size.",
        )
        .with_input(structure([
            instance_identifier(),
            required("LogFileName", string()),
            optional("Marker", string()),
            optional("NumberOfLines", integer()),
        ]))
        .with_output(structure([
            optional("LogFileData", string()),
            optional("Marker", string()),
            optional("AdditionalDataPending", boolean()),
        ])),
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
        assert_eq!(operations.len(), 59);
    }

    #[test]
    fn test_query_operations_have_no_http_bindings() {
        for operation in operations() {
            assert_eq!(operation.http.method, "POST", "{}", operation.name);
            assert_eq!(operation.http.uri, "/", "{}", operation.name);
            assert!(operation
                .input
                .members()
                .iter()
                .all(|m| m.location == Location::Body));
        }
    }

    #[test]
    fn test_list_member_names() {
        let create = operations()
            .into_iter()
            .find(|o| o.name == "CreateDBInstance")
            .unwrap();
        match &create.input.member("VpcSecurityGroupIds").unwrap().shape {
            Shape::List { member_name, .. } => assert_eq!(member_name, "VpcSecurityGroupId"),
            other => panic!("unexpected shape {:?}", other),
        }
        assert_eq!(create.title, "Create DB Instance");
        assert_eq!(create.block_id(), "rds.createDBInstance");
    }
}
