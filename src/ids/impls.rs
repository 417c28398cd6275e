use super::{AbilityId, BuffId, UnitTypeId};

impl UnitTypeId {
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_gas_building(self) -> bool {
		matches!(
			self,
			UnitTypeId::Extractor
			| UnitTypeId::ExtractorRich
			| UnitTypeId::Refinery
			| UnitTypeId::RefineryRich
			| UnitTypeId::Assimilator
			| UnitTypeId::AssimilatorRich
		)
	}
}

impl AbilityId {
	/// Abilities which make a worker head back to a drop-off point.
	///
	/// `Smart` is included: a worker right-clicked on its townhall is returning cargo.
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_return_class(self) -> bool {
		matches!(
			self,
			AbilityId::HarvestReturn
			| AbilityId::HarvestReturnDrone
			| AbilityId::HarvestReturnSCV
			| AbilityId::HarvestReturnProbe
			| AbilityId::Smart
		)
	}
	/// Orders of a worker sent to construct a structure.
	#[inline]
	pub fn is_constructing(self) -> bool {
		matches!(
			self,
			AbilityId::ZergBuildHatchery | AbilityId::ZergBuildExtractor | AbilityId::ZergBuildSpawningPool
		)
	}
}

impl BuffId {
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_carry(self) -> bool {
		matches!(
			self,
			BuffId::CarryMineralFieldMinerals
			| BuffId::CarryHighYieldMineralFieldMinerals
			| BuffId::CarryHarvestableVespeneGeyserGas
			| BuffId::CarryHarvestableVespeneGeyserGasProtoss
			| BuffId::CarryHarvestableVespeneGeyserGasZerg
		)
	}
}
