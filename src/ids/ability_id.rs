#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[enum_from_str(use_primitives)]
pub enum AbilityId {
	Null = 0,
	Smart = 1,
	MoveMove = 16,
	CancelBuildInProgress = 314,
	ZergBuildHatchery = 1152,
	ZergBuildExtractor = 1154,
	ZergBuildSpawningPool = 1155,
	HarvestGatherDrone = 1183,
	HarvestReturnDrone = 1184,
	LarvaTrainDrone = 1342,
	LarvaTrainOverlord = 1344,
	TrainQueen = 1632,
	Stop = 3665,
	HarvestGather = 3666,
	HarvestReturn = 3667,
	HarvestGatherSCV = 295,
	HarvestReturnSCV = 296,
	HarvestGatherProbe = 298,
	HarvestReturnProbe = 299,
}
