/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_schema::structure;

/// See [`CreateLayerInput`](crate::input::CreateLayerInput)
pub mod create_layer_input {
    /// A builder for [`CreateLayerInput`](crate::input::CreateLayerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        stack_id: std::option::Option<std::string::String>,
        r#type: std::option::Option<crate::model::LayerType>,
        name: std::option::Option<std::string::String>,
        shortname: std::option::Option<std::string::String>,
        attributes: std::option::Option<
            std::collections::HashMap<std::string::String, std::string::String>,
        >,
        custom_instance_profile_arn: std::option::Option<std::string::String>,
        custom_security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        packages: std::option::Option<std::vec::Vec<std::string::String>>,
        volume_configurations:
            std::option::Option<std::vec::Vec<crate::model::VolumeConfiguration>>,
        enable_auto_healing: std::option::Option<bool>,
        auto_assign_elastic_ips: std::option::Option<bool>,
        auto_assign_public_ips: std::option::Option<bool>,
        custom_recipes: std::option::Option<crate::model::Recipes>,
        install_updates_on_boot: std::option::Option<bool>,
        use_ebs_optimized_instances: std::option::Option<bool>,
        lifecycle_event_configuration:
            std::option::Option<crate::model::LifecycleEventConfiguration>,
    }
    impl Builder {
        /// <p>The layer stack ID.</p>
        pub fn stack_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.stack_id = Some(inp.into());
            self
        }
        pub fn set_stack_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.stack_id = inp;
            self
        }
        /// <p>The layer type. A stack cannot have more than one built-in layer of the same type.</p>
        pub fn r#type(mut self, inp: crate::model::LayerType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::LayerType>) -> Self {
            self.r#type = inp;
            self
        }
        /// <p>The layer name, which is used by the console.</p>
        pub fn name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        /// <p>For custom layers only, use this parameter to specify the layer's short name, which
        /// is used internally by AWS OpsWorks Stacks and by Chef recipes.</p>
        pub fn shortname(mut self, inp: impl Into<std::string::String>) -> Self {
            self.shortname = Some(inp.into());
            self
        }
        /// <p>One or more user-defined key-value pairs to be added to the stack attributes.</p>
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.attributes
                .get_or_insert_with(std::collections::HashMap::new)
                .insert(k.into(), v.into());
            self
        }
        pub fn set_attributes(
            mut self,
            inp: std::option::Option<
                std::collections::HashMap<std::string::String, std::string::String>,
            >,
        ) -> Self {
            self.attributes = inp;
            self
        }
        /// <p>The ARN of an IAM profile to be used for the layer's EC2 instances.</p>
        pub fn custom_instance_profile_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.custom_instance_profile_arn = Some(inp.into());
            self
        }
        /// <p>An array containing the layer custom security group IDs.</p>
        pub fn custom_security_group_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.custom_security_group_ids
                .get_or_insert_with(Vec::new)
                .push(inp.into());
            self
        }
        pub fn set_custom_security_group_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.custom_security_group_ids = inp;
            self
        }
        /// <p>An array of <code>Package</code> objects that describes the layer packages.</p>
        pub fn packages(mut self, inp: impl Into<std::string::String>) -> Self {
            self.packages.get_or_insert_with(Vec::new).push(inp.into());
            self
        }
        pub fn set_packages(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.packages = inp;
            self
        }
        /// <p>A <code>VolumeConfigurations</code> object that describes the layer's Amazon EBS
        /// volumes.</p>
        pub fn volume_configurations(mut self, inp: crate::model::VolumeConfiguration) -> Self {
            self.volume_configurations
                .get_or_insert_with(Vec::new)
                .push(inp);
            self
        }
        pub fn set_volume_configurations(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::VolumeConfiguration>>,
        ) -> Self {
            self.volume_configurations = inp;
            self
        }
        /// <p>Whether to disable auto healing for the layer.</p>
        pub fn enable_auto_healing(mut self, inp: bool) -> Self {
            self.enable_auto_healing = Some(inp);
            self
        }
        /// <p>Whether to automatically assign an Elastic IP address to the layer's instances.</p>
        pub fn auto_assign_elastic_ips(mut self, inp: bool) -> Self {
            self.auto_assign_elastic_ips = Some(inp);
            self
        }
        /// <p>For stacks that are running in a VPC, whether to automatically assign a public IP
        /// address to the layer's instances.</p>
        pub fn auto_assign_public_ips(mut self, inp: bool) -> Self {
            self.auto_assign_public_ips = Some(inp);
            self
        }
        /// <p>A <code>LayerCustomRecipes</code> object that specifies the layer custom recipes.</p>
        pub fn custom_recipes(mut self, inp: crate::model::Recipes) -> Self {
            self.custom_recipes = Some(inp);
            self
        }
        /// <p>Whether to install operating system and package updates when the instance boots.</p>
        pub fn install_updates_on_boot(mut self, inp: bool) -> Self {
            self.install_updates_on_boot = Some(inp);
            self
        }
        /// <p>Whether to use Amazon EBS-optimized instances.</p>
        pub fn use_ebs_optimized_instances(mut self, inp: bool) -> Self {
            self.use_ebs_optimized_instances = Some(inp);
            self
        }
        pub fn lifecycle_event_configuration(
            mut self,
            inp: crate::model::LifecycleEventConfiguration,
        ) -> Self {
            self.lifecycle_event_configuration = Some(inp);
            self
        }
        /// Consumes the builder and constructs a [`CreateLayerInput`](crate::input::CreateLayerInput)
        pub fn build(self) -> crate::input::CreateLayerInput {
            crate::input::CreateLayerInput {
                stack_id: self.stack_id,
                r#type: self.r#type,
                name: self.name,
                shortname: self.shortname,
                attributes: self.attributes,
                custom_instance_profile_arn: self.custom_instance_profile_arn,
                custom_security_group_ids: self.custom_security_group_ids,
                packages: self.packages,
                volume_configurations: self.volume_configurations,
                enable_auto_healing: self.enable_auto_healing,
                auto_assign_elastic_ips: self.auto_assign_elastic_ips,
                auto_assign_public_ips: self.auto_assign_public_ips,
                custom_recipes: self.custom_recipes,
                install_updates_on_boot: self.install_updates_on_boot,
                use_ebs_optimized_instances: self.use_ebs_optimized_instances,
                lifecycle_event_configuration: self.lifecycle_event_configuration,
            }
        }
    }
}
impl CreateLayerInput {
    /// Serializes the input and creates an operation ready to be dispatched to the regional
    /// OpsWorks endpoint
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateLayer>,
        smithy_http::operation::BuildError,
    > {
        let mut request = crate::operation::CreateLayer::marshall(Some(self))?;
        aws_endpoint::apply_endpoint(&mut request, config.endpoint_resolver(), config.region())
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateLayer::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new(
            "CreateLayer",
            "opsworks",
        ));
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateLayerInput`](crate::input::CreateLayerInput)
    pub fn builder() -> crate::input::create_layer_input::Builder {
        crate::input::create_layer_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug, std::default::Default)]
pub struct CreateLayerInput {
    pub stack_id: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::LayerType>,
    pub name: std::option::Option<std::string::String>,
    pub shortname: std::option::Option<std::string::String>,
    pub attributes:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub custom_instance_profile_arn: std::option::Option<std::string::String>,
    pub custom_security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    pub packages: std::option::Option<std::vec::Vec<std::string::String>>,
    pub volume_configurations: std::option::Option<std::vec::Vec<crate::model::VolumeConfiguration>>,
    pub enable_auto_healing: std::option::Option<bool>,
    pub auto_assign_elastic_ips: std::option::Option<bool>,
    pub auto_assign_public_ips: std::option::Option<bool>,
    pub custom_recipes: std::option::Option<crate::model::Recipes>,
    pub install_updates_on_boot: std::option::Option<bool>,
    pub use_ebs_optimized_instances: std::option::Option<bool>,
    pub lifecycle_event_configuration:
        std::option::Option<crate::model::LifecycleEventConfiguration>,
}

structure!(CreateLayerInput {
    stack_id: "StackId",
    r#type: "Type",
    name: "Name",
    shortname: "Shortname",
    attributes: "Attributes",
    custom_instance_profile_arn: "CustomInstanceProfileArn",
    custom_security_group_ids: "CustomSecurityGroupIds",
    packages: "Packages",
    volume_configurations: "VolumeConfigurations",
    enable_auto_healing: "EnableAutoHealing",
    auto_assign_elastic_ips: "AutoAssignElasticIps",
    auto_assign_public_ips: "AutoAssignPublicIps",
    custom_recipes: "CustomRecipes",
    install_updates_on_boot: "InstallUpdatesOnBoot",
    use_ebs_optimized_instances: "UseEbsOptimizedInstances",
    lifecycle_event_configuration: "LifecycleEventConfiguration",
});
