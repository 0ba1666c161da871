use crate::{
    client::{api::Page, model::error::ApiError, ApiClient},
    model::reading_module::{
        CreateReadingModuleDto, PaginatedReadingModulesDto, ReadingModuleDetailDto,
        UpdateReadingModuleDto,
    },
};

/// Optional metadata filters for the module listing.
#[derive(Clone, Debug, Default)]
pub struct ModuleFilter {
    pub level: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

impl ApiClient {
    pub async fn get_modules(
        &self,
        filter: &ModuleFilter,
        page: Page,
    ) -> Result<PaginatedReadingModulesDto, ApiError> {
        let mut query = page.query();
        for (name, value) in [
            ("level", &filter.level),
            ("genre", &filter.genre),
            ("language", &filter.language),
        ] {
            if let Some(value) = value {
                query.push((name, value.clone()));
            }
        }

        self.get_with_query("modules", &query).await
    }

    pub async fn get_module(&self, module_id: i32) -> Result<ReadingModuleDetailDto, ApiError> {
        self.get(&format!("modules/{}", module_id)).await
    }

    pub async fn create_module(
        &self,
        payload: &CreateReadingModuleDto,
    ) -> Result<ReadingModuleDetailDto, ApiError> {
        self.post("modules", payload).await
    }

    pub async fn update_module(
        &self,
        module_id: i32,
        payload: &UpdateReadingModuleDto,
    ) -> Result<ReadingModuleDetailDto, ApiError> {
        self.put(&format!("modules/{}", module_id), payload).await
    }

    pub async fn delete_module(&self, module_id: i32) -> Result<(), ApiError> {
        self.delete(&format!("modules/{}", module_id)).await
    }
}
