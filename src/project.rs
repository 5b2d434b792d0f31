use std::borrow::Borrow;

use crate::client::KiCadClient;
use crate::error::KiCadError;
use crate::model::common::{DocumentSpecifier, MapMergeMode};
use crate::model::project::{NetClass, TextVariables};
use crate::proto::common::commands as common_commands;
use crate::proto::common::types as common_types;
use crate::wrapper::Wrapper;

/// Project-level settings of the project owning a document.
#[derive(Clone, Debug)]
pub struct Project {
    client: KiCadClient,
    document: DocumentSpecifier,
}

impl Project {
    pub fn new(client: KiCadClient, document: DocumentSpecifier) -> Self {
        Self { client, document }
    }

    pub fn name(&self) -> Option<&str> {
        self.document.project.name.as_deref()
    }

    pub fn document(&self) -> &DocumentSpecifier {
        &self.document
    }

    pub fn get_net_classes(&self) -> Result<Vec<NetClass>, KiCadError> {
        let response: common_commands::NetClassesResponse =
            self.client.send(&common_commands::GetNetClasses {})?;

        Ok(response.net_classes.into_iter().map(NetClass::from).collect())
    }

    pub fn get_text_variables(&self) -> Result<TextVariables, KiCadError> {
        let command = common_commands::GetTextVariables {
            document: Some(self.document.to_proto()),
        };
        let response: common_types::TextVariables = self.client.send(&command)?;

        Ok(TextVariables::from(response))
    }

    /// Writes `variables` to the project. With `MmmMerge` existing names not
    /// in `variables` are kept; with `MmmReplace` they are removed.
    pub fn set_text_variables<P>(
        &self,
        variables: &TextVariables<P>,
        merge_mode: MapMergeMode,
    ) -> Result<(), KiCadError>
    where
        P: Borrow<common_types::TextVariables>,
    {
        self.client.execute(&common_commands::SetTextVariables {
            document: Some(self.document.to_proto()),
            variables: Some(variables.proto().clone()),
            merge_mode: merge_mode as i32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Project;
    use crate::mock::{self, MockHost};
    use crate::model::common::{DocumentSpecifier, DocumentType, MapMergeMode, ProjectInfo};
    use crate::model::project::TextVariables;
    use crate::proto::common::commands as common_commands;
    use crate::proto::common::types as common_types;

    fn project(host: MockHost) -> Project {
        Project::new(
            mock::client(host),
            DocumentSpecifier {
                document_type: DocumentType::Pcb,
                board_filename: Some("demo.kicad_pcb".to_string()),
                project: ProjectInfo {
                    name: Some("demo".to_string()),
                    path: None,
                },
            },
        )
    }

    #[test]
    fn get_net_classes_wraps_each_class() {
        let host = MockHost::new(|_| {
            mock::ok(&common_commands::NetClassesResponse {
                net_classes: vec![
                    common_types::NetClass {
                        name: "Default".to_string(),
                        ..Default::default()
                    },
                    common_types::NetClass {
                        name: "Power".to_string(),
                        priority: 1,
                        ..Default::default()
                    },
                ],
            })
        });
        let project = project(host);

        let classes = project.get_net_classes().expect("net classes");
        let names: Vec<&str> = classes.iter().map(|class| class.name()).collect();
        assert_eq!(names, vec!["Default", "Power"]);
        assert_eq!(project.name(), Some("demo"));
    }

    #[test]
    fn text_variables_round_trip_through_the_host() {
        let host = MockHost::new(|request| match mock::command_name(request) {
            "kiapi.common.commands.GetTextVariables" => {
                let command: common_commands::GetTextVariables = mock::command(request);
                assert!(command.document.is_some());
                mock::ok(&common_types::TextVariables {
                    variables: [("REV".to_string(), "A".to_string())].into_iter().collect(),
                })
            }
            _ => mock::ok_empty(),
        });
        let requests = host.requests();
        let project = project(host);

        let mut variables = project.get_text_variables().expect("variables");
        assert_eq!(variables.get("REV"), Some("A"));
        variables.insert("REV", "B");
        project
            .set_text_variables(&variables, MapMergeMode::MmmMerge)
            .expect("set variables");

        let requests = requests.lock().expect("requests");
        let sent: common_commands::SetTextVariables = mock::command(&requests[1]);
        assert_eq!(sent.merge_mode, MapMergeMode::MmmMerge as i32);
        let sent = TextVariables::from(sent.variables.unwrap_or_default());
        assert_eq!(sent.get("REV"), Some("B"));
    }
}
