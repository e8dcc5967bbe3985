use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250201_000001_create_locations_table::Migration),
            Box::new(m20250201_000002_create_products_table::Migration),
            Box::new(m20250201_000003_create_stock_tables::Migration),
            Box::new(m20250201_000004_create_planning_tables::Migration),
            Box::new(m20250201_000005_create_suggestion_tables::Migration),
            Box::new(m20250201_000006_create_engine_settings_table::Migration),
        ]
    }
}

mod m20250201_000001_create_locations_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000001_create_locations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Locations::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Locations::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Locations::Name).string().not_null())
                        .col(ColumnDef::new(Locations::LocationType).string().not_null())
                        .col(
                            ColumnDef::new(Locations::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Locations::CreatedAt).timestamp_with_time_zone().not_null())
                        .col(ColumnDef::new(Locations::UpdatedAt).timestamp_with_time_zone().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_locations_type")
                        .table(Locations::Table)
                        .col(Locations::LocationType)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Locations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Locations {
        Table,
        Id,
        Name,
        LocationType,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250201_000002_create_products_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000002_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Products::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Products::Sku).string().not_null().unique_key())
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(
                            ColumnDef::new(Products::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Products::CreatedAt).timestamp_with_time_zone().not_null())
                        .col(ColumnDef::new(Products::UpdatedAt).timestamp_with_time_zone().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Products {
        Table,
        Id,
        Sku,
        Name,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250201_000003_create_stock_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000003_create_stock_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(StockBatches::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StockBatches::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StockBatches::ProductId).uuid().not_null())
                        .col(ColumnDef::new(StockBatches::LocationId).uuid().not_null())
                        .col(
                            ColumnDef::new(StockBatches::Quantity)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(StockBatches::BatchCode).string().null())
                        .col(
                            ColumnDef::new(StockBatches::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stock_batches_product_location")
                        .table(StockBatches::Table)
                        .col(StockBatches::ProductId)
                        .col(StockBatches::LocationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Transfers::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Transfers::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Transfers::ProductId).uuid().not_null())
                        .col(
                            ColumnDef::new(Transfers::SourceLocationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transfers::DestinationLocationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transfers::Quantity)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Transfers::Status).string().not_null())
                        .col(ColumnDef::new(Transfers::CreatedAt).timestamp_with_time_zone().not_null())
                        .col(ColumnDef::new(Transfers::UpdatedAt).timestamp_with_time_zone().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_transfers_destination_status")
                        .table(Transfers::Table)
                        .col(Transfers::DestinationLocationId)
                        .col(Transfers::Status)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Transfers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(StockBatches::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum StockBatches {
        Table,
        Id,
        ProductId,
        LocationId,
        Quantity,
        BatchCode,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Transfers {
        Table,
        Id,
        ProductId,
        SourceLocationId,
        DestinationLocationId,
        Quantity,
        Status,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250201_000004_create_planning_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000004_create_planning_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DemandForecasts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DemandForecasts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DemandForecasts::ProductId).uuid().not_null())
                        .col(
                            ColumnDef::new(DemandForecasts::LocationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DemandForecasts::BaseDailyRate)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(DemandForecasts::ManualOverrideRate)
                                .decimal()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DemandForecasts::SeasonalMultipliers)
                                .json()
                                .null(),
                        )
                        .col(ColumnDef::new(DemandForecasts::TrendRate).decimal().null())
                        .col(
                            ColumnDef::new(DemandForecasts::Enabled)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(DemandForecasts::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DemandForecasts::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_demand_forecasts_product_location")
                        .table(DemandForecasts::Table)
                        .col(DemandForecasts::ProductId)
                        .col(DemandForecasts::LocationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SafetyStockRules::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SafetyStockRules::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::ProductId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::LocationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::ThresholdType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::ThresholdValue)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SafetyStockRules::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Suppliers::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(
                            ColumnDef::new(Suppliers::LeadTimeDays)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Suppliers::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp_with_time_zone().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ShippingRoutes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ShippingRoutes::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ShippingRoutes::Name).string().not_null())
                        .col(ColumnDef::new(ShippingRoutes::Legs).json().not_null())
                        .col(
                            ColumnDef::new(ShippingRoutes::IsDefault)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(ShippingRoutes::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(ShippingRoutes::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ShippingRoutes::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ShippingRoutes::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SafetyStockRules::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(DemandForecasts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum DemandForecasts {
        Table,
        Id,
        ProductId,
        LocationId,
        BaseDailyRate,
        ManualOverrideRate,
        SeasonalMultipliers,
        TrendRate,
        Enabled,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum SafetyStockRules {
        Table,
        Id,
        ProductId,
        LocationId,
        ThresholdType,
        ThresholdValue,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        Id,
        Name,
        LeadTimeDays,
        IsActive,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum ShippingRoutes {
        Table,
        Id,
        Name,
        Legs,
        IsDefault,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250201_000005_create_suggestion_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000005_create_suggestion_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ReplenishmentSuggestions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SuggestionType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::Urgency)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::ProductId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::ProductSku)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::ProductName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::LocationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::LocationName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::CurrentStock)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::InTransitStock)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::ReservedStock)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::AvailableStock)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::DailyDemandRate)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::WeeklyDemandRate)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::DaysOfStockRemaining)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::ProjectedStockoutDate)
                                .date()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SafetyStockThreshold)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::RecommendedQuantity)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::EstimatedArrivalDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SourceLocationId)
                                .uuid()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SourceLocationName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SourceAvailableQuantity)
                                .big_integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SupplierId)
                                .uuid()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SupplierName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::SupplierLeadTimeDays)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::TransitDays)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::TransportMethod)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::Reasoning)
                                .json()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReplenishmentSuggestions::GeneratedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_replenishment_suggestions_status")
                        .table(ReplenishmentSuggestions::Table)
                        .col(ReplenishmentSuggestions::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Notifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Notifications::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Notifications::NotificationType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Notifications::Title).string().not_null())
                        .col(ColumnDef::new(Notifications::Message).string().not_null())
                        .col(ColumnDef::new(Notifications::EntityType).string().not_null())
                        .col(ColumnDef::new(Notifications::EntityId).uuid().not_null())
                        .col(ColumnDef::new(Notifications::Payload).json().not_null())
                        .col(
                            ColumnDef::new(Notifications::IsRead)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Notifications::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Notifications::Table).to_owned())
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(ReplenishmentSuggestions::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ReplenishmentSuggestions {
        Table,
        Id,
        SuggestionType,
        Urgency,
        Status,
        ProductId,
        ProductSku,
        ProductName,
        LocationId,
        LocationName,
        CurrentStock,
        InTransitStock,
        ReservedStock,
        AvailableStock,
        DailyDemandRate,
        WeeklyDemandRate,
        DaysOfStockRemaining,
        ProjectedStockoutDate,
        SafetyStockThreshold,
        RecommendedQuantity,
        EstimatedArrivalDate,
        SourceLocationId,
        SourceLocationName,
        SourceAvailableQuantity,
        SupplierId,
        SupplierName,
        SupplierLeadTimeDays,
        TransitDays,
        TransportMethod,
        Reasoning,
        GeneratedAt,
    }

    #[derive(DeriveIden)]
    enum Notifications {
        Table,
        Id,
        NotificationType,
        Title,
        Message,
        EntityType,
        EntityId,
        Payload,
        IsRead,
        CreatedAt,
    }
}

mod m20250201_000006_create_engine_settings_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250201_000006_create_engine_settings_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(EngineSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(EngineSettings::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::CriticalDays)
                                .big_integer()
                                .not_null()
                                .default(3),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::WarningDays)
                                .big_integer()
                                .not_null()
                                .default(7),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::PlannedDays)
                                .big_integer()
                                .not_null()
                                .default(14),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::DefaultSafetyDays)
                                .big_integer()
                                .not_null()
                                .default(14),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::IncludeInTransit)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(EngineSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(EngineSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum EngineSettings {
        Table,
        Id,
        CriticalDays,
        WarningDays,
        PlannedDays,
        DefaultSafetyDays,
        IncludeInTransit,
        UpdatedAt,
    }
}
